//! Arquivo: core/smp/topology.rs
//!
//! Propósito: Identificação lógica das CPUs vista pelo núcleo cpufreq.
//! A descoberta real (ACPI MADT / Device Tree) e o controle online/offline
//! pertencem ao kernel hospedeiro; aqui só definimos os papéis fixos.

// Topologia de CPUs (SMP)

/// Identificador lógico de CPU (0 a N-1)
pub type CpuId = u32;

/// CPU de boot: a varredura de tela decide o estacionamento do núcleo
/// secundário enquanto processa esta CPU.
pub const PRIMARY_CPU: CpuId = 0;

/// Núcleo estacionado (offline) com a tela desligada.
pub const SECONDARY_CPU: CpuId = 1;
