//! Aplicação de Frequência
//!
//! Último passo de um pedido do governador: reduz o pedido ao teto de tela,
//! limita-o a `[allowed_min, allowed_max]`, respeita o modo manual e programa
//! o clock entre as notificações PRECHANGE / POSTCHANGE.
//!
//! # Pré-condições
//!
//! - Guarda da CPU adquirida (o `&mut CpuState` é a prova).
//! - `suspended == false` já verificado pelo chamador.

use super::driver::Shared;
use super::error::CpuFreqError;
use super::guard::CpuState;
use super::platform::Platform;
use super::{FreqTransition, FrequencyKHz, Policy, SetRateReason, TransitionPhase};
use crate::core::smp::CpuId;

/// Fotografia da policy no momento do pedido.
///
/// A policy pertence ao framework; o trabalho despachado para outra CPU
/// carrega apenas o que precisa dela.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicySnapshot {
    pub cpu: CpuId,
    pub cur: FrequencyKHz,
    pub max: FrequencyKHz,
}

impl From<&Policy> for PolicySnapshot {
    fn from(policy: &Policy) -> Self {
        Self {
            cpu: policy.cpu,
            cur: policy.cur,
            max: policy.max,
        }
    }
}

impl<P: Platform> Shared<P> {
    /// Programa `rate` na CPU da policy.
    ///
    /// Falha do clock é devolvida sem POSTCHANGE: a transição não terminou.
    pub(crate) fn apply(
        &self,
        state: &mut CpuState,
        policy: PolicySnapshot,
        rate: FrequencyKHz,
    ) -> Result<(), CpuFreqError> {
        let cpu = policy.cpu;
        let mut rate = rate;

        // Teto antes do clamp: os limites permitidos sempre vencem.
        let capped = self.caps.capped_freq();
        if capped != 0 && rate > capped {
            crate::kdebug!("(CpuFreq) tela apagada: teto=", capped);
            rate = capped;
        }

        let mut new_freq = state.limits.clamp(rate);

        if self.caps.manual_override() {
            let max = state.limits.hardware_max_or(policy.max);
            if policy.cur == max {
                return Ok(());
            }
            new_freq = max;
        }

        let freqs = FreqTransition {
            cpu,
            old: policy.cur,
            new: new_freq,
        };

        self.platform
            .notify_transition(&freqs, TransitionPhase::PreChange);

        if let Err(err) = self.platform.set_rate(cpu, new_freq, SetRateReason::CpuFreq) {
            crate::kerror!("(CpuFreq) set_rate falhou, status=", err.0 as i64);
            return Err(err.into());
        }

        self.platform
            .notify_transition(&freqs, TransitionPhase::PostChange);
        Ok(())
    }
}
