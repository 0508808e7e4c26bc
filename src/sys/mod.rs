//! System Definitions (ABI).
//!
//! Contém os códigos de status compartilhados com o resto do kernel.

pub mod error;

pub use error::Errno;
