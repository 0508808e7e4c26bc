//! # Synchronization Primitives
//!
//! Primitivas de sincronização do núcleo cpufreq.
//!
//! ## Hierarquia de Uso
//!
//! ```text
//! spin::Mutex → Guarda por CPU (seção crítica da mudança de clock)
//! Completion  → Resposta one-shot do trabalho despachado para outra CPU
//! ```
//!
//! ## Regras
//!
//! - **Ordem de Lock**: varreduras de tela/suspensão visitam as CPUs sempre
//!   em ordem crescente de id, uma guarda por vez
//! - Quem despacha para outra CPU NUNCA espera segurando a guarda da CPU alvo

/// Sinal de conclusão one-shot
pub mod completion;

pub use completion::{set_relax_hook, Completion};
