//! Arquivo: core/power/cpufreq/mod.rs
//!
//! Propósito: Escalonamento de Frequência da CPU (DVFS).
//! Recebe pedidos de frequência do framework de governadores, limita-os aos
//! limites de operação de cada núcleo e executa a troca de clock NA CPU
//! afetada, coordenando tudo com suspensão do sistema e tela desligada.
//!
//! Detalhes de Implementação:
//! - `limits`:   limites de hardware e permitidos por CPU (clamp).
//! - `applier`:  aplica uma frequência já validada (clock + notificações).
//! - `dispatch`: pedido síncrono para a fila de trabalho da CPU alvo.
//! - `capping`:  máquina de estados de suspensão e de tela desligada.
//! - `guard`:    mutex + flag de suspensão por CPU (espinha dorsal de lock).
//! - `driver`:   callbacks do governador e ciclo de vida.
//! - `attr`:     atributos de texto do plano de controle.

//! CPU Frequency Scaling

pub mod applier;
pub mod attr;
pub mod capping;
pub mod config;
#[cfg(feature = "smp")]
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod guard;
pub mod limits;
pub mod platform;

#[cfg(test)]
mod test;

use crate::core::smp::CpuId;
use bitflags::bitflags;

pub use config::CpuFreqConfig;
pub use driver::CpuFreqCore;
pub use error::{ClockError, CpuFreqError};
pub use limits::CoreLimits;
pub use platform::Platform;

/// Unidade de frequência em KHz
pub type FrequencyKHz = u32;

/// Entrada ignorada da tabela (frequência não suportada nesta placa).
pub const CPUFREQ_ENTRY_INVALID: FrequencyKHz = !0 - 1;

/// Sentinela de fim de tabela.
pub const CPUFREQ_TABLE_END: FrequencyKHz = !0;

/// Entrada da tabela de frequências de uma CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreqTableEntry {
    /// Dado opaco do driver de clock (índice do PLL, etc.)
    pub driver_data: u32,
    pub frequency: FrequencyKHz,
}

impl FreqTableEntry {
    pub const END: Self = Self::new(0, CPUFREQ_TABLE_END);

    pub const fn new(driver_data: u32, frequency: FrequencyKHz) -> Self {
        Self {
            driver_data,
            frequency,
        }
    }
}

/// Visão somente-leitura de uma tabela terminada por `CPUFREQ_TABLE_END`.
///
/// A tabela pertence ao driver de clock e é imutável após a descoberta.
#[derive(Debug, Clone, Copy)]
pub struct FreqTable<'a> {
    entries: &'a [FreqTableEntry],
}

impl<'a> FreqTable<'a> {
    pub const fn new(entries: &'a [FreqTableEntry]) -> Self {
        Self { entries }
    }

    /// Entradas válidas como `(índice, frequência)`, até a sentinela.
    pub fn iter(&self) -> impl Iterator<Item = (usize, FrequencyKHz)> + 'a {
        self.entries
            .iter()
            .map(|e| e.frequency)
            .take_while(|&f| f != CPUFREQ_TABLE_END)
            .enumerate()
            .filter(|&(_, f)| f != CPUFREQ_ENTRY_INVALID)
    }

    /// Frequência do índice devolvido pelo casamento de tabela.
    pub fn frequency(&self, index: usize) -> Option<FrequencyKHz> {
        self.iter().find(|&(i, _)| i == index).map(|(_, f)| f)
    }

    /// Menor e maior frequência presentes, se houver alguma entrada válida.
    pub fn bounds(&self) -> Option<(FrequencyKHz, FrequencyKHz)> {
        self.iter().fold(None, |acc, (_, f)| match acc {
            None => Some((f, f)),
            Some((lo, hi)) => Some((lo.min(f), hi.max(f))),
        })
    }
}

/// Relação entre a frequência pedida e a entrada escolhida na tabela.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Menor frequência igual ou acima do alvo ("pelo menos").
    Low,
    /// Maior frequência igual ou abaixo do alvo ("no máximo").
    High,
}

/// Limites físicos da CPU, preenchidos no `init`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuInfo {
    pub min_freq: FrequencyKHz,
    pub max_freq: FrequencyKHz,
    pub transition_latency_ns: u32,
}

/// Política de frequência para uma CPU (pertence ao framework de governadores)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Policy {
    pub cpu: CpuId,
    pub min: FrequencyKHz,
    pub max: FrequencyKHz,
    pub cur: FrequencyKHz,
    pub cpuinfo: CpuInfo,
}

impl Policy {
    pub fn new(cpu: CpuId) -> Self {
        Self {
            cpu,
            ..Self::default()
        }
    }
}

/// Par (antiga, nova) anunciado aos ouvintes de transição.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreqTransition {
    pub cpu: CpuId,
    pub old: FrequencyKHz,
    pub new: FrequencyKHz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    PreChange,
    PostChange,
}

/// Motivo repassado ao primitivo de clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetRateReason {
    /// Transição negociada pelo governador.
    CpuFreq,
    /// Teto/restauração forçados pela tela (sem notificações).
    ScreenCap,
}

bitflags! {
    /// Flags anunciadas ao framework de governadores.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DriverFlags: u32 {
        /// O driver permanece registrado mesmo se nenhuma CPU inicializar.
        const STICKY      = 1 << 0;
        /// `loops_per_jiffy` não muda com a frequência.
        const CONST_LOOPS = 1 << 1;
    }
}

/// Interface consumida pelo framework de governadores
pub trait CpuFreqDriver: Send + Sync {
    /// Nome do driver
    fn name(&self) -> &'static str;

    fn flags(&self) -> DriverFlags;

    /// Inicializa a policy da CPU especificada
    fn init(&self, policy: &mut Policy) -> Result<(), CpuFreqError>;

    /// Ajusta os limites pedidos aos limites físicos. Nunca falha.
    fn verify(&self, policy: &mut Policy) -> Result<(), CpuFreqError>;

    /// Define a frequência alvo
    fn target(
        &self,
        policy: &Policy,
        target_freq: FrequencyKHz,
        relation: Relation,
    ) -> Result<(), CpuFreqError>;

    /// Obtém a frequência atual
    fn get(&self, cpu: CpuId) -> FrequencyKHz;
}
