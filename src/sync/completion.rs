//! Completion - sinal de conclusão one-shot com valor de resposta
//!
//! Usado pelo despachante entre CPUs: quem pede espera, quem executa
//! completa com o status. Reutilizável via `reinit`.

use core::sync::atomic::{AtomicBool, Ordering};
use spin::{Mutex, Once};

/// Giros consecutivos antes de ceder a CPU pelo hook de relax.
const MAX_SPIN_BACKOFF: u32 = 64;

static RELAX_HOOK: Once<fn()> = Once::new();

/// Registra a função de relax do scheduler (ex: `yield`). Retorna `false`
/// se já havia uma registrada.
pub fn set_relax_hook(hook: fn()) -> bool {
    let mut installed = false;
    RELAX_HOOK.call_once(|| {
        installed = true;
        hook
    });
    installed
}

/// Backoff exponencial limitado; no limite, cede a CPU pelo hook.
fn relax(spins: &mut u32) {
    if *spins < MAX_SPIN_BACKOFF {
        for _ in 0..*spins {
            core::hint::spin_loop();
        }
        *spins = (*spins * 2).max(1);
        return;
    }

    match RELAX_HOOK.get() {
        Some(hook) => hook(),
        None => core::hint::spin_loop(),
    }
}

/// Sinal one-shot carregando a resposta `T`.
///
/// # Protocolo
///
/// 1. `reinit()` antes de publicar um novo pedido
/// 2. O executor chama `complete(valor)` exatamente uma vez
/// 3. O solicitante chama `wait()` e recebe o valor
///
/// # Custo
///
/// `wait` não dorme: o solicitante ocupa a CPU dele durante todo o
/// `set_rate` remoto. Depois de um backoff curto, cada volta chama o hook
/// registrado em `set_relax_hook`; sem hook, continua girando.
pub struct Completion<T> {
    done: AtomicBool,
    value: Mutex<Option<T>>,
}

impl<T> Completion<T> {
    pub const fn new() -> Self {
        Self {
            done: AtomicBool::new(false),
            value: Mutex::new(None),
        }
    }

    /// Rearma o sinal, descartando qualquer resposta não consumida.
    pub fn reinit(&self) {
        *self.value.lock() = None;
        self.done.store(false, Ordering::Release);
    }

    /// Publica a resposta e acorda o solicitante.
    pub fn complete(&self, value: T) {
        *self.value.lock() = Some(value);
        self.done.store(true, Ordering::Release);
    }

    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Bloqueia até `complete` e consome a resposta.
    pub fn wait(&self) -> T {
        let mut spins = 1;
        loop {
            // TODO: Dormir na WaitQueue do scheduler em vez de girar
            while !self.done.load(Ordering::Acquire) {
                relax(&mut spins);
            }

            if let Some(value) = self.value.lock().take() {
                return value;
            }
            // Outro `wait` consumiu a resposta; aguardar a próxima.
            self.done.store(false, Ordering::Release);
        }
    }

    /// Consome a resposta se já estiver disponível.
    pub fn try_wait(&self) -> Option<T> {
        if self.done.load(Ordering::Acquire) {
            self.value.lock().take()
        } else {
            None
        }
    }
}

impl<T> Default for Completion<T> {
    fn default() -> Self {
        Self::new()
    }
}
