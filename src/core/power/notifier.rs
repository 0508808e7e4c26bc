//! Arquivo: core/power/notifier.rs
//!
//! Propósito: Cadeias de Notificação de Energia.
//! Os subsistemas se inscrevem explicitamente na fonte do evento e são
//! chamados em ordem de prioridade quando ela dispara.
//!
//! Detalhes de Implementação:
//! - Handlers são `Arc<dyn PowerNotifier<E>>`, podendo ser compartilhados
//!   com o resto do driver.
//! - A lista é copiada antes da entrega: nenhum handler roda com o lock da
//!   cadeia adquirido (handlers podem bloquear).

//! Notifier chains

use super::state::NotifyResult;
use alloc::sync::Arc;
use alloc::vec::Vec;
use spin::Mutex;

/// Assinante de eventos do tipo `E`.
pub trait PowerNotifier<E>: Send + Sync {
    fn notify(&self, event: E) -> NotifyResult;
}

struct Entry<E> {
    priority: i32,
    handler: Arc<dyn PowerNotifier<E>>,
}

/// Cadeia de assinantes ordenada por prioridade (maior primeiro).
pub struct NotifierChain<E> {
    entries: Mutex<Vec<Entry<E>>>,
}

impl<E: Copy> NotifierChain<E> {
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Inscreve um handler. Empates preservam a ordem de registro.
    pub fn register(&self, priority: i32, handler: Arc<dyn PowerNotifier<E>>) {
        let mut entries = self.entries.lock();
        let pos = entries
            .iter()
            .position(|e| e.priority < priority)
            .unwrap_or(entries.len());
        entries.insert(pos, Entry { priority, handler });
    }

    /// Remove um handler previamente inscrito. Retorna `false` se ausente.
    pub fn unregister(&self, handler: &Arc<dyn PowerNotifier<E>>) -> bool {
        let mut entries = self.entries.lock();
        match entries.iter().position(|e| Arc::ptr_eq(&e.handler, handler)) {
            Some(pos) => {
                entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entrega `event` a todos os assinantes até algum responder `Stop`.
    pub fn call_chain(&self, event: E) -> NotifyResult {
        let handlers: Vec<Arc<dyn PowerNotifier<E>>> = self
            .entries
            .lock()
            .iter()
            .map(|e| e.handler.clone())
            .collect();

        let mut result = NotifyResult::Done;
        for handler in handlers {
            result = handler.notify(event);
            if result == NotifyResult::Stop {
                break;
            }
        }
        result
    }
}

impl<E: Copy> Default for NotifierChain<E> {
    fn default() -> Self {
        Self::new()
    }
}
