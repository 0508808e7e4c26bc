//! Forge CpuFreq Library.
//!
//! Núcleo de controle de frequência por CPU do kernel Forge: limita os
//! pedidos do governador aos limites de cada núcleo, programa o clock NA
//! CPU afetada e coordena tudo com suspensão do sistema e tela desligada.
//!
//! O hardware (clock, hotplug, tabelas, filas de trabalho) chega pelos
//! traits de `core::power::cpufreq::platform`.

#![cfg_attr(not(test), no_std)]

// Habilitar alocação dinâmica (necessário para Vec/Box/Arc)
extern crate alloc;

// --- Módulos Centrais ---
pub mod core; // Logging, Energia, SMP, Filas de Trabalho
pub mod sync; // Primitivas de Sincronização (Completion)
pub mod sys; // Definições de Sistema (Erros)

pub use crate::core::power::cpufreq::{
    CpuFreqConfig, CpuFreqCore, CpuFreqDriver, CpuFreqError, Platform, Policy, Relation,
};
