//! Core Module
//!
//! Lógica central do núcleo cpufreq, independente de arquitetura.

pub mod logging;
pub mod power;
pub mod smp;
pub mod work;
