//! Arquivo: core/power/mod.rs
//!
//! Propósito: Gerenciamento de Energia.
//!
//! Módulos contidos:
//! - `cpufreq`: Escalonamento de frequência por CPU (DVFS).
//! - `notifier`: Cadeias de notificação de suspensão e de tela.
//! - `state`: Eventos de energia.

pub mod cpufreq;
pub mod notifier;
pub mod state;
