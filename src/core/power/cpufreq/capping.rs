//! Controlador de Suspensão e Teto de Tela
//!
//! Duas dimensões independentes que compartilham a guarda de cada CPU:
//!
//! ```text
//! Suspensão:  Active ──suspend_prepare──► Suspended ──post_suspend──► Active
//! Tela:       ScreenOn ──early_suspend──► ScreenOff ──late_resume──► ScreenOn
//! ```
//!
//! - Suspensa, uma CPU recusa pedidos na hora (`DeviceSuspended`).
//! - Com a tela apagada, o clock de toda CPU acima do teto é forçado para o
//!   teto direto no primitivo de clock (sem notificações: é um corte de
//!   emergência, não uma transição negociada), e o núcleo secundário é
//!   desligado.
//! - As varreduras visitam as CPUs em ordem crescente, uma guarda por vez.

use super::driver::Shared;
use super::platform::Platform;
use super::SetRateReason;
use crate::core::power::notifier::PowerNotifier;
use crate::core::power::state::{NotifyResult, PmEvent, ScreenEvent};
use crate::core::smp::PRIMARY_CPU;

impl<P: Platform> Shared<P> {
    pub(crate) fn suspend_all(&self) {
        for (_cpu, slot) in self.cpus.iter() {
            slot.guard.lock().suspended = true;
        }
        crate::kinfo!("(CpuFreq) CPUs suspensas, pedidos bloqueados");
    }

    pub(crate) fn resume_all(&self) {
        for (_cpu, slot) in self.cpus.iter() {
            slot.guard.lock().suspended = false;
        }
        crate::kinfo!("(CpuFreq) CPUs retomadas, pedidos liberados");
    }

    /// Tela apagou: aplica o teto e estaciona o núcleo secundário.
    pub(crate) fn screen_off(&self) {
        for (cpu, slot) in self.cpus.iter() {
            let _state = slot.guard.lock();

            let ceiling = self.caps.screen_off_max_freq();
            if ceiling != 0 {
                self.caps.set_capped(ceiling);

                let cur = self.platform.get_rate(cpu);
                if cur > ceiling {
                    crate::kdebug!("(CpuFreq) teto de tela aplicado, cpu=", cpu);
                    if self
                        .platform
                        .set_rate(cpu, ceiling, SetRateReason::ScreenCap)
                        .is_err()
                    {
                        crate::kerror!("(CpuFreq) falha ao aplicar teto, cpu=", cpu);
                    }
                }
            }

            if cpu == PRIMARY_CPU
                && self.config.park_secondary_on_screen_off
                && self.platform.num_online() > 1
            {
                let secondary = self.config.secondary_cpu;
                match self.platform.cpu_down(secondary) {
                    Ok(()) => crate::kinfo!("(CpuFreq) tela apagada, cpu offline=", secondary),
                    Err(_) => crate::kwarn!("(CpuFreq) falha ao desligar cpu=", secondary),
                }
            }
        }
    }

    /// Tela acendeu: remove o teto, restaura cada CPU e religa o secundário.
    pub(crate) fn screen_on(&self) {
        let mut was_capped = false;

        for (cpu, slot) in self.cpus.iter() {
            let state = slot.guard.lock();

            if self.caps.take_capped() != 0 {
                was_capped = true;
            }

            if was_capped && state.requested != 0 {
                let restore = state.limits.clamp(state.requested);
                let cur = self.platform.get_rate(cpu);
                if cur != restore {
                    crate::kdebug!("(CpuFreq) restaurando freq pré-teto, cpu=", cpu);
                    if self
                        .platform
                        .set_rate(cpu, restore, SetRateReason::ScreenCap)
                        .is_err()
                    {
                        crate::kerror!("(CpuFreq) falha ao restaurar freq, cpu=", cpu);
                    }
                }
            }

            if cpu == PRIMARY_CPU
                && self.config.park_secondary_on_screen_off
                && self.platform.num_online() < 2
            {
                let secondary = self.config.secondary_cpu;
                match self.platform.cpu_up(secondary) {
                    Ok(()) => crate::kinfo!("(CpuFreq) tela acesa, cpu online=", secondary),
                    Err(_) => crate::kwarn!("(CpuFreq) falha ao religar cpu=", secondary),
                }
            }
        }
    }
}

impl<P: Platform> PowerNotifier<PmEvent> for Shared<P> {
    fn notify(&self, event: PmEvent) -> NotifyResult {
        match event {
            PmEvent::SuspendPrepare | PmEvent::HibernationPrepare => self.suspend_all(),
            PmEvent::PostSuspend | PmEvent::PostHibernation => self.resume_all(),
            _ => {}
        }
        NotifyResult::Done
    }
}

impl<P: Platform> PowerNotifier<ScreenEvent> for Shared<P> {
    fn notify(&self, event: ScreenEvent) -> NotifyResult {
        match event {
            ScreenEvent::EarlySuspend => self.screen_off(),
            ScreenEvent::LateResume => self.screen_on(),
        }
        NotifyResult::Done
    }
}
