//! Arquivo: core/work/workqueue.rs
//!
//! Propósito: Filas de Trabalho por CPU (Per-CPU Work Queues).
//! Permite agendar funções para rodar em contexto de thread NA CPU escolhida,
//! requisito de operações afins ao núcleo (ex: reprogramar o clock da CPU).
//!
//! Detalhes de Implementação:
//! - Uma `VecDeque` protegida por `spin::Mutex` para cada CPU possível.
//! - O worker vinculado à CPU N consome apenas a fila N (`run_pending`).
//! - O lock da fila nunca é mantido durante a execução de um item.

//! Filas de trabalho por CPU

use crate::core::smp::{CpuId, PerCpu};
use alloc::boxed::Box;
use alloc::collections::VecDeque;
use spin::Mutex;

/// Trait para itens de trabalho
pub trait WorkItem: Send {
    /// Executa o trabalho
    fn run(&mut self);
}

/// Um item de trabalho genérico (Closure)
pub struct ClosureWork {
    func: Box<dyn FnMut() + Send>,
}

impl ClosureWork {
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self { func: Box::new(f) }
    }
}

impl WorkItem for ClosureWork {
    fn run(&mut self) {
        (self.func)();
    }
}

/// Fila de trabalho com uma lista pendente por CPU.
pub struct CpuWorkQueue {
    name: &'static str,
    queues: PerCpu<Mutex<VecDeque<Box<dyn WorkItem>>>>,
}

impl CpuWorkQueue {
    /// Cria a fila para `cpus` CPUs possíveis.
    pub fn new(name: &'static str, cpus: usize) -> Option<Self> {
        Some(Self {
            name,
            queues: PerCpu::new(cpus, |_| Mutex::new(VecDeque::new()))?,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Enfileira um trabalho para a CPU `cpu`.
    ///
    /// Retorna o item de volta se a CPU não existir.
    pub fn enqueue_on(
        &self,
        cpu: CpuId,
        work: Box<dyn WorkItem>,
    ) -> Result<(), Box<dyn WorkItem>> {
        match self.queues.get(cpu) {
            Some(queue) => {
                queue.lock().push_back(work);
                Ok(())
            }
            None => Err(work),
        }
    }

    /// Número de itens aguardando na CPU `cpu`.
    pub fn pending(&self, cpu: CpuId) -> usize {
        self.queues.get(cpu).map_or(0, |q| q.lock().len())
    }

    /// Processa todos os itens pendentes da CPU `cpu` (Flush).
    ///
    /// Deve ser chamado pelo worker que executa na própria CPU `cpu`.
    /// Retorna quantos itens foram executados.
    pub fn run_pending(&self, cpu: CpuId) -> usize {
        let Some(queue) = self.queues.get(cpu) else {
            return 0;
        };

        let mut ran = 0;
        loop {
            // Retirar um item protegendo o lock o mínimo possível
            let item = queue.lock().pop_front();

            match item {
                Some(mut work) => {
                    work.run();
                    ran += 1;
                }
                None => break, // Fila vazia
            }
        }
        ran
    }
}
