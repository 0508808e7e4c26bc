//! Colaboradores Externos do Núcleo CpuFreq
//!
//! O núcleo não programa hardware diretamente. Tudo que toca clock,
//! hotplug, tabelas e filas de trabalho chega por estes traits, que o
//! kernel hospedeiro implementa uma vez para a plataforma.

use super::error::{ClockError, CpuFreqError};
use super::{FreqTable, FreqTransition, FrequencyKHz, Policy, Relation, SetRateReason, TransitionPhase};
use crate::core::smp::CpuId;
use crate::core::work::WorkItem;
use alloc::boxed::Box;

/// Serviço de controle de clock da CPU.
pub trait ClockSource: Send + Sync {
    /// Frequência atual programada na CPU.
    fn get_rate(&self, cpu: CpuId) -> FrequencyKHz;

    /// Programa uma nova frequência.
    ///
    /// Chamado sempre com a guarda da CPU adquirida.
    fn set_rate(&self, cpu: CpuId, rate: FrequencyKHz, reason: SetRateReason) -> Result<(), ClockError>;

    /// Latência de troca de frequência em microssegundos.
    fn switch_time_us(&self) -> u32;
}

/// Topologia e hotplug de CPUs.
pub trait CpuControl: Send + Sync {
    /// Número de CPUs possíveis (fixo após o boot).
    fn possible_cpus(&self) -> usize;

    /// A CPU está online e aceitando trabalho?
    fn is_active(&self, cpu: CpuId) -> bool;

    fn num_online(&self) -> usize;

    fn cpu_down(&self, cpu: CpuId) -> Result<(), CpuFreqError>;

    fn cpu_up(&self, cpu: CpuId) -> Result<(), CpuFreqError>;

    /// `Some(cpu)` se o contexto atual estiver fixado exclusivamente em `cpu`.
    fn current_pinned_cpu(&self) -> Option<CpuId>;
}

/// Tabelas de frequência e casamento (alvo, relação) → índice.
pub trait FrequencyTables: Send + Sync {
    fn table(&self, cpu: CpuId) -> Option<FreqTable<'_>>;

    /// Índice da melhor entrada para `(target, relation)` dentro de
    /// `[policy.min, policy.max]`, ou `None` se nenhuma satisfizer.
    fn table_target(
        &self,
        policy: &Policy,
        table: FreqTable<'_>,
        target: FrequencyKHz,
        relation: Relation,
    ) -> Option<usize>;
}

/// Ouvintes de transição de frequência (PRECHANGE / POSTCHANGE).
pub trait TransitionNotifier: Send + Sync {
    fn notify_transition(&self, freqs: &FreqTransition, phase: TransitionPhase);
}

/// Filas de trabalho vinculadas a CPUs.
pub trait WorkDispatcher: Send + Sync {
    /// Enfileira `work` para rodar em contexto de thread na CPU `cpu`.
    ///
    /// Falha transitória de alocação deve ser reportada como
    /// `CpuFreqError::ResourceExhausted`.
    fn queue_work_on(&self, cpu: CpuId, work: Box<dyn WorkItem>) -> Result<(), CpuFreqError>;
}

/// Tudo que o núcleo consome da plataforma.
pub trait Platform:
    ClockSource + CpuControl + FrequencyTables + TransitionNotifier + WorkDispatcher + 'static
{
}

impl<T> Platform for T where
    T: ClockSource + CpuControl + FrequencyTables + TransitionNotifier + WorkDispatcher + 'static
{
}
