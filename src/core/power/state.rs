//! Arquivo: core/power/state.rs
//!
//! Propósito: Eventos de Energia entregues aos assinantes do kernel.
//! Duas fontes independentes: o gerenciador de suspensão do sistema
//! (S3/S4) e o controlador do display (tela ligada/desligada).
//!
//! Detalhes de Implementação:
//! - PREPARE chega antes de congelar tarefas; POST depois de descongelar.
//! - Eventos de tela seguem o modelo "early suspend": desligar a tela é o
//!   primeiro passo de economia, antes de qualquer suspensão do sistema.

//! Eventos de Energia (System Power Events)

/// Transições do gerenciador de suspensão do sistema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PmEvent {
    /// Antes de hibernar (S4).
    HibernationPrepare = 1,
    /// Depois de voltar da hibernação.
    PostHibernation = 2,
    /// Antes de Suspend-to-RAM (S3).
    SuspendPrepare = 3,
    /// Depois de voltar do Suspend-to-RAM.
    PostSuspend = 4,
    /// Antes de restaurar uma imagem de hibernação.
    RestorePrepare = 5,
    /// Depois de restaurar uma imagem de hibernação.
    PostRestore = 6,
}

impl PmEvent {
    /// Converte o código numérico da cadeia de notificação.
    pub fn from_raw(val: u8) -> Option<Self> {
        match val {
            1 => Some(Self::HibernationPrepare),
            2 => Some(Self::PostHibernation),
            3 => Some(Self::SuspendPrepare),
            4 => Some(Self::PostSuspend),
            5 => Some(Self::RestorePrepare),
            6 => Some(Self::PostRestore),
            _ => None,
        }
    }
}

/// Transições do display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Tela apagando (early suspend).
    EarlySuspend,
    /// Tela acendendo (late resume).
    LateResume,
}

/// Resposta de um assinante.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyResult {
    /// Evento não interessa / tratado sem objeção.
    Done,
    /// Evento tratado.
    Ok,
    /// Interrompe a propagação para os próximos assinantes.
    Stop,
}

/// Nível do handler de tela para drivers que limitam o clock.
pub const SCREEN_NOTIFIER_LEVEL: i32 = 50;
