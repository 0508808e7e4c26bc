//! Arquivo: core/work/mod.rs
//!
//! Propósito: Execução diferida em contexto de thread.
//!
//! Módulos contidos:
//! - `workqueue`: Filas de trabalho por CPU.

pub mod workqueue;

pub use workqueue::{ClosureWork, CpuWorkQueue, WorkItem};
