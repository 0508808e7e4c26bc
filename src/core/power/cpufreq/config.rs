//! # Configuração do Núcleo CpuFreq
//!
//! Define constantes e a configuração de runtime do driver.

use super::FrequencyKHz;
use crate::core::smp::{CpuId, SECONDARY_CPU};

// =============================================================================
// IDENTIDADE
// =============================================================================

/// Nome registrado no framework de governadores
pub const DRIVER_NAME: &str = "forge-cpufreq";

/// Nome da fila de trabalho por CPU usada no despacho
pub const WORKQUEUE_NAME: &str = "forge-cpufreq";

// =============================================================================
// LIMITES E VALORES PADRÃO
// =============================================================================

/// Sentinela "sem limite" aceita por `set_freq_limits`
pub const NO_LIMIT: FrequencyKHz = 0xFFFF_FFFF;

/// Teto padrão com a tela desligada (frequência conservadora)
pub const DEFAULT_SCREEN_OFF_MAX_FREQ: FrequencyKHz = 594_000;

/// Conversão da latência de troca reportada pelo clock (us → ns)
pub const NSEC_PER_USEC: u32 = 1_000;

/// Prioridade na cadeia de notificação de suspensão
pub const PM_NOTIFIER_PRIORITY: i32 = 0;

// =============================================================================
// CONFIGURAÇÃO DE RUNTIME
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFreqConfig {
    /// Teto inicial com a tela desligada (0 = sem teto)
    pub screen_off_max_freq: FrequencyKHz,
    /// Limites fixos (min, max) impostos à policy no `init`, quando a
    /// plataforma exige uma faixa diferente da tabela.
    pub fixed_limits: Option<(FrequencyKHz, FrequencyKHz)>,
    /// Desligar o núcleo secundário enquanto a tela estiver apagada
    pub park_secondary_on_screen_off: bool,
    /// Núcleo estacionado com a tela apagada
    pub secondary_cpu: CpuId,
}

impl Default for CpuFreqConfig {
    fn default() -> Self {
        Self {
            screen_off_max_freq: DEFAULT_SCREEN_OFF_MAX_FREQ,
            fixed_limits: None,
            park_secondary_on_screen_off: true,
            secondary_cpu: SECONDARY_CPU,
        }
    }
}
