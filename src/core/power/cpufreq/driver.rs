//! Driver CpuFreq: Ciclo de Vida e Callbacks do Governador
//!
//! `CpuFreqCore` é o objeto registrado no framework de governadores e nas
//! cadeias de notificação. Todo o estado vive em `Shared`, alocado uma vez
//! quando a topologia já é conhecida e compartilhado (via `Arc`) com os
//! trabalhos despachados e os handlers de eventos.
//!
//! ## Ordem do `target`
//!
//! ```text
//! slot existe? ─► CPU ativa? ─► lock(guarda) ─► suspensa? ─► casa na tabela
//!      │                                                         │
//!   ENODEV                                       fixado na CPU alvo?
//!                                                 sim: apply() com a guarda
//!                                                 não: solta a guarda, despacha
//! ```

use super::applier::PolicySnapshot;
use super::config::{CpuFreqConfig, DRIVER_NAME, NSEC_PER_USEC, PM_NOTIFIER_PRIORITY};
use super::error::CpuFreqError;
use super::guard::{CpuSlot, ScreenCapState};
use super::limits::CoreLimits;
use super::platform::Platform;
use super::{CpuFreqDriver, DriverFlags, FrequencyKHz, Policy, Relation, SetRateReason};
use crate::core::power::notifier::{NotifierChain, PowerNotifier};
use crate::core::power::state::{NotifyResult, PmEvent, ScreenEvent, SCREEN_NOTIFIER_LEVEL};
use crate::core::smp::{CpuId, PerCpu};
use alloc::sync::Arc;

/// Estado compartilhado entre o driver, os trabalhos e os handlers.
pub(crate) struct Shared<P: Platform> {
    pub(crate) platform: Arc<P>,
    pub(crate) config: CpuFreqConfig,
    pub(crate) cpus: PerCpu<CpuSlot>,
    pub(crate) caps: ScreenCapState,
}

impl<P: Platform> Shared<P> {
    /// Slot da CPU, ou `DeviceUnavailable` se ela não existir.
    pub(crate) fn slot(&self, cpu: CpuId) -> Result<&CpuSlot, CpuFreqError> {
        self.cpus.get(cpu).ok_or(CpuFreqError::DeviceUnavailable)
    }
}

/// Núcleo de controle de frequência por CPU.
pub struct CpuFreqCore<P: Platform> {
    shared: Arc<Shared<P>>,
}

impl<P: Platform> Clone for CpuFreqCore<P> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<P: Platform> CpuFreqCore<P> {
    /// Aloca o registro por CPU para todas as CPUs possíveis.
    pub fn new(platform: Arc<P>, config: CpuFreqConfig) -> Result<Self, CpuFreqError> {
        let count = platform.possible_cpus();
        let cpus = PerCpu::new(count, CpuSlot::new).ok_or_else(|| {
            crate::kerror!("(CpuFreq) falha ao alocar slots por CPU, count=", count);
            CpuFreqError::ResourceExhausted
        })?;

        crate::kinfo!("(CpuFreq) driver criado, cpus=", count);
        Ok(Self {
            shared: Arc::new(Shared {
                platform,
                config,
                cpus,
                caps: ScreenCapState::new(config.screen_off_max_freq),
            }),
        })
    }

    pub(crate) fn shared(&self) -> &Arc<Shared<P>> {
        &self.shared
    }

    /// Inscreve os handlers de suspensão e de tela nas cadeias do sistema.
    pub fn register(&self, pm: &NotifierChain<PmEvent>, screen: &NotifierChain<ScreenEvent>) {
        let pm_handler: Arc<dyn PowerNotifier<PmEvent>> = self.shared.clone();
        let screen_handler: Arc<dyn PowerNotifier<ScreenEvent>> = self.shared.clone();
        pm.register(PM_NOTIFIER_PRIORITY, pm_handler);
        screen.register(SCREEN_NOTIFIER_LEVEL, screen_handler);
        crate::kok!("(CpuFreq) handlers de energia registrados");
    }

    pub fn unregister(&self, pm: &NotifierChain<PmEvent>, screen: &NotifierChain<ScreenEvent>) {
        let pm_handler: Arc<dyn PowerNotifier<PmEvent>> = self.shared.clone();
        let screen_handler: Arc<dyn PowerNotifier<ScreenEvent>> = self.shared.clone();
        pm.unregister(&pm_handler);
        screen.unregister(&screen_handler);
    }

    // =========================================================================
    // LIMITES
    // =========================================================================

    /// Ajusta os limites permitidos de uma CPU (ex: throttling térmico).
    ///
    /// `NO_LIMIT` restaura o limite físico; valores fora da faixa física
    /// degradam para ela sem erro.
    pub fn set_freq_limits(
        &self,
        cpu: CpuId,
        min: FrequencyKHz,
        max: FrequencyKHz,
    ) -> Result<(), CpuFreqError> {
        let slot = self.shared.slot(cpu)?;
        let mut state = slot.guard.lock();

        if !state.limits.is_initialized() {
            self.discover_limits(cpu, &mut state.limits);
        }
        state.limits.restrict(min, max);

        crate::kdebug!("(CpuFreq) limites ajustados, cpu=", cpu);
        crate::ktrace!("(CpuFreq) allowed_min=", state.limits.allowed_min());
        crate::ktrace!("(CpuFreq) allowed_max=", state.limits.allowed_max());
        Ok(())
    }

    /// Cópia dos limites atuais da CPU.
    pub fn limits(&self, cpu: CpuId) -> Option<CoreLimits> {
        let slot = self.shared.cpus.get(cpu)?;
        let limits = slot.guard.lock().limits;
        Some(limits)
    }

    fn discover_limits(&self, cpu: CpuId, limits: &mut CoreLimits) {
        let found = self
            .shared
            .platform
            .table(cpu)
            .map(|table| limits.discover(table))
            .unwrap_or(false);
        if !found {
            crate::kwarn!("(CpuFreq) tabela vazia ou ausente, cpu=", cpu);
        }
    }

    // =========================================================================
    // ESTADO DE ENERGIA
    // =========================================================================

    pub fn is_suspended(&self, cpu: CpuId) -> Option<bool> {
        let slot = self.shared.cpus.get(cpu)?;
        let suspended = slot.guard.lock().suspended;
        Some(suspended)
    }

    /// Teto ativo (0 = sem teto).
    pub fn capped_freq(&self) -> FrequencyKHz {
        self.shared.caps.capped_freq()
    }

    pub fn screen_off_max_freq(&self) -> FrequencyKHz {
        self.shared.caps.screen_off_max_freq()
    }

    pub fn manual_override(&self) -> bool {
        self.shared.caps.manual_override()
    }

    pub(crate) fn set_manual_override(&self, enabled: bool) {
        self.shared.caps.set_manual_override(enabled);
        crate::kinfo!("(CpuFreq) modo manual=", enabled as u64);
    }

    pub fn suspend(&self) {
        self.shared.suspend_all();
    }

    pub fn resume(&self) {
        self.shared.resume_all();
    }

    pub fn screen_off(&self) {
        self.shared.screen_off();
    }

    pub fn screen_on(&self) {
        self.shared.screen_on();
    }

    /// Entrega direta de um evento de suspensão (sem cadeia).
    pub fn pm_event(&self, event: PmEvent) -> NotifyResult {
        PowerNotifier::<PmEvent>::notify(&*self.shared, event)
    }
}

impl<P: Platform> CpuFreqDriver for CpuFreqCore<P> {
    fn name(&self) -> &'static str {
        DRIVER_NAME
    }

    fn flags(&self) -> DriverFlags {
        DriverFlags::STICKY | DriverFlags::CONST_LOOPS
    }

    fn init(&self, policy: &mut Policy) -> Result<(), CpuFreqError> {
        let cpu = policy.cpu;
        let platform = &self.shared.platform;
        let slot = self.shared.slot(cpu)?;
        let mut state = slot.guard.lock();

        self.discover_limits(cpu, &mut state.limits);

        let Some(table) = platform.table(cpu) else {
            crate::kerror!("(CpuFreq) sem tabela de frequências, cpu=", cpu);
            return Err(CpuFreqError::InvalidTarget);
        };

        if let Some((min, max)) = table.bounds() {
            policy.cpuinfo.min_freq = min;
            policy.cpuinfo.max_freq = max;
            policy.min = min;
            policy.max = max;
        }
        if let Some((min, max)) = self.shared.config.fixed_limits {
            policy.cpuinfo.min_freq = min;
            policy.cpuinfo.max_freq = max;
            policy.min = min;
            policy.max = max;
        }

        let mut cur = platform.get_rate(cpu);
        let index = platform
            .table_target(policy, table, cur, Relation::High)
            .or_else(|| platform.table_target(policy, table, cur, Relation::Low));
        let Some(snapped) = index.and_then(|i| table.frequency(i)) else {
            crate::kerror!("(CpuFreq) cpu em frequência inválida, freq=", cur);
            return Err(CpuFreqError::InvalidTarget);
        };

        if cur != snapped {
            platform.set_rate(cpu, snapped, SetRateReason::CpuFreq)?;
            crate::kinfo!("(CpuFreq) init: trocando para freq de tabela=", snapped);
            cur = snapped;
        }

        policy.cur = cur;
        policy.cpuinfo.transition_latency_ns =
            platform.switch_time_us().saturating_mul(NSEC_PER_USEC);
        state.requested = cur;

        crate::kinfo!("(CpuFreq) cpu inicializada=", cpu);
        Ok(())
    }

    fn verify(&self, policy: &mut Policy) -> Result<(), CpuFreqError> {
        let (lo, hi) = (policy.cpuinfo.min_freq, policy.cpuinfo.max_freq);
        policy.min = policy.min.clamp(lo, hi.max(lo));
        policy.max = policy.max.clamp(lo, hi.max(lo));
        if policy.min > policy.max {
            policy.min = policy.max;
        }
        Ok(())
    }

    fn target(
        &self,
        policy: &Policy,
        target_freq: FrequencyKHz,
        relation: Relation,
    ) -> Result<(), CpuFreqError> {
        let cpu = policy.cpu;
        let platform = &self.shared.platform;
        let slot = self.shared.slot(cpu)?;

        #[cfg(feature = "smp")]
        if !platform.is_active(cpu) {
            crate::kdebug!("(CpuFreq) cpu inativa=", cpu);
            return Err(CpuFreqError::DeviceUnavailable);
        }

        let mut state = slot.guard.lock();
        if state.suspended {
            crate::kdebug!("(CpuFreq) pedido recusado, cpu suspensa=", cpu);
            return Err(CpuFreqError::DeviceSuspended);
        }

        let freq = platform
            .table(cpu)
            .and_then(|table| {
                platform
                    .table_target(policy, table, target_freq, relation)
                    .and_then(|index| table.frequency(index))
            })
            .ok_or_else(|| {
                crate::kdebug!("(CpuFreq) alvo sem entrada na tabela=", target_freq);
                CpuFreqError::InvalidTarget
            })?;

        state.requested = freq;
        let snapshot = PolicySnapshot::from(policy);

        #[cfg(feature = "smp")]
        if platform.current_pinned_cpu() != Some(cpu) {
            drop(state);
            return self.shared.dispatch_remote(snapshot, freq);
        }

        self.shared.apply(&mut state, snapshot, freq)
    }

    fn get(&self, cpu: CpuId) -> FrequencyKHz {
        self.shared.platform.get_rate(cpu)
    }
}
