//! Arquivo: core/smp/mod.rs
//!
//! Propósito: Módulo de Multiprocessamento Simétrico (SMP).
//!
//! Módulos contidos:
//! - `percpu`: Registro de dados por CPU.
//! - `topology`: Ids lógicos e papéis fixos das CPUs.

pub mod percpu;
pub mod topology;

pub use percpu::{PerCpu, MAX_CPUS};
pub use topology::{CpuId, PRIMARY_CPU, SECONDARY_CPU};
