//! Guarda por CPU e Estado Global de Teto
//!
//! Cada CPU possui UM mutex que serializa tudo que altera o estado dela:
//! limites, pedidos de frequência, flag de suspensão e teto de tela.
//!
//! ## Regras de Lock
//!
//! - Toda programação de clock de uma CPU acontece com a guarda dela.
//! - Os campos de `ScreenCapState` são escritos pela varredura de tela com a
//!   guarda da CPU sendo processada, e lidos pelo caminho de pedido com a
//!   guarda da própria CPU.
//! - Nenhuma CPU altera diretamente o estado protegido pela guarda de outra.

use super::limits::CoreLimits;
use super::FrequencyKHz;
use crate::core::smp::CpuId;
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use spin::Mutex;

#[cfg(feature = "smp")]
use super::dispatch::CpuWork;

/// Estado protegido pela guarda de uma CPU.
#[derive(Debug, Default)]
pub(crate) struct CpuState {
    /// Suspensão do sistema em andamento: pedidos são recusados.
    pub suspended: bool,
    pub limits: CoreLimits,
    /// Última frequência de tabela pedida para esta CPU (ponto de
    /// restauração ao religar a tela).
    pub requested: FrequencyKHz,
}

/// Slot por CPU: guarda + slot de pedido entre CPUs.
pub(crate) struct CpuSlot {
    pub guard: Mutex<CpuState>,
    #[cfg(feature = "smp")]
    pub work: CpuWork,
}

impl CpuSlot {
    pub fn new(_cpu: CpuId) -> Self {
        Self {
            guard: Mutex::new(CpuState::default()),
            #[cfg(feature = "smp")]
            work: CpuWork::new(),
        }
    }
}

/// Estado de teto compartilhado por todas as CPUs.
pub(crate) struct ScreenCapState {
    /// Teto ativo (0 = tela ligada, sem teto)
    capped: AtomicU32,
    /// Teto configurado para quando a tela apagar
    screen_off_max: AtomicU32,
    /// Modo manual: todo pedido vira "máximo da CPU"
    manual_override: AtomicBool,
}

impl ScreenCapState {
    pub const fn new(screen_off_max: FrequencyKHz) -> Self {
        Self {
            capped: AtomicU32::new(0),
            screen_off_max: AtomicU32::new(screen_off_max),
            manual_override: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn capped_freq(&self) -> FrequencyKHz {
        self.capped.load(Ordering::Acquire)
    }

    pub fn set_capped(&self, freq: FrequencyKHz) {
        self.capped.store(freq, Ordering::Release);
    }

    /// Remove o teto, devolvendo o valor anterior.
    pub fn take_capped(&self) -> FrequencyKHz {
        self.capped.swap(0, Ordering::AcqRel)
    }

    #[inline]
    pub fn screen_off_max_freq(&self) -> FrequencyKHz {
        self.screen_off_max.load(Ordering::Acquire)
    }

    pub fn set_screen_off_max_freq(&self, freq: FrequencyKHz) {
        self.screen_off_max.store(freq, Ordering::Release);
    }

    #[inline]
    pub fn manual_override(&self) -> bool {
        self.manual_override.load(Ordering::Acquire)
    }

    pub fn set_manual_override(&self, enabled: bool) {
        self.manual_override.store(enabled, Ordering::Release);
    }
}
