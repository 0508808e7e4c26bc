//! Despacho de Pedidos entre CPUs
//!
//! Programar o clock é estado de hardware afim ao núcleo: a troca precisa
//! ser emitida pela própria CPU alvo. Um pedido vindo de outra CPU vira uma
//! chamada remota síncrona: o slot de trabalho da CPU alvo é preenchido,
//! enfileirado na fila dela, e o solicitante bloqueia até a resposta.
//!
//! ## Protocolo do slot
//!
//! ```text
//! solicitante                       worker da CPU alvo
//! -----------                       ------------------
//! lock(dispatch)
//! generation += 1   (cancela itens velhos)
//! done.reinit()
//! request = {policy, freq}
//! queue_work_on(cpu) ─────────────► lock(guarda)
//!                                   generation confere?
//!                                   suspended? / apply()
//! done.wait() ◄──────────────────── done.complete(status)
//! unlock(dispatch)
//! ```
//!
//! O solicitante NUNCA segura a guarda da CPU alvo enquanto espera; só o
//! trabalho remoto a adquire. O lock `dispatch` garante no máximo um pedido
//! em voo por CPU.

use super::applier::PolicySnapshot;
use super::driver::Shared;
use super::error::CpuFreqError;
use super::platform::Platform;
use super::FrequencyKHz;
use crate::core::smp::CpuId;
use crate::core::work::WorkItem;
use crate::sync::Completion;
use alloc::boxed::Box;
use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};
use spin::Mutex;

#[derive(Debug, Clone, Copy, Default)]
struct WorkRequest {
    policy: PolicySnapshot,
    frequency: FrequencyKHz,
}

/// Slot de pedido entre CPUs, alocado uma vez por CPU e reutilizado.
pub(crate) struct CpuWork {
    dispatch: Mutex<()>,
    generation: AtomicU64,
    request: Mutex<WorkRequest>,
    done: Completion<Result<(), CpuFreqError>>,
}

impl CpuWork {
    pub fn new() -> Self {
        Self {
            dispatch: Mutex::new(()),
            generation: AtomicU64::new(0),
            request: Mutex::new(WorkRequest::default()),
            done: Completion::new(),
        }
    }

    /// Invalida qualquer item ainda enfileirado e devolve a nova geração.
    pub fn cancel(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    #[inline]
    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::Acquire) == generation
    }
}

/// Item enfileirado na CPU alvo.
pub(crate) struct SetCpuWork<P: Platform> {
    shared: Arc<Shared<P>>,
    cpu: CpuId,
    generation: u64,
}

impl<P: Platform> WorkItem for SetCpuWork<P> {
    fn run(&mut self) {
        self.shared.run_cpu_work(self.cpu, self.generation);
    }
}

impl<P: Platform> Shared<P> {
    /// Executa `freq` na CPU da policy a partir de outra CPU e espera o
    /// status do trabalho remoto.
    pub(crate) fn dispatch_remote(
        self: &Arc<Self>,
        policy: PolicySnapshot,
        freq: FrequencyKHz,
    ) -> Result<(), CpuFreqError> {
        let cpu = policy.cpu;
        let work = &self.slot(cpu)?.work;

        let _inflight = work.dispatch.lock();

        let generation = work.cancel();
        work.done.reinit();
        *work.request.lock() = WorkRequest {
            policy,
            frequency: freq,
        };

        let item = Box::new(SetCpuWork {
            shared: self.clone(),
            cpu,
            generation,
        });

        crate::ktrace!("(CpuFreq) despachando pedido para cpu=", cpu);
        if let Err(err) = self.platform.queue_work_on(cpu, item) {
            crate::kerror!("(CpuFreq) falha ao enfileirar trabalho, cpu=", cpu);
            work.cancel();
            return Err(err);
        }

        work.done.wait()
    }

    /// Corpo do trabalho, já rodando na CPU `cpu`.
    pub(crate) fn run_cpu_work(&self, cpu: CpuId, generation: u64) {
        let Some(slot) = self.cpus.get(cpu) else {
            return;
        };

        let mut state = slot.guard.lock();
        if !slot.work.is_current(generation) {
            crate::ktrace!("(CpuFreq) trabalho obsoleto descartado, cpu=", cpu);
            return;
        }

        let request = *slot.work.request.lock();
        let status = if state.suspended {
            crate::kdebug!("(CpuFreq) cpu suspensa antes do trabalho rodar=", cpu);
            Err(CpuFreqError::DeviceSuspended)
        } else {
            self.apply(&mut state, request.policy, request.frequency)
        };
        drop(state);

        slot.work.done.complete(status);
    }
}
