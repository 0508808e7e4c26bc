//! Testes do Núcleo CpuFreq
//!
//! # Por que testar?
//! Um clock programado fora dos limites pode travar o SoC ou queimar a
//! bateria com a tela apagada. E a troca precisa acontecer NA CPU afetada:
//! um pedido despachado para a fila errada programa o núcleo errado.
//!
//! # Cobertura
//!
//! 1. `init`/`verify`: casamento na tabela, latência e limites da policy.
//! 2. Limites: clamp dos pedidos e degradação silenciosa para o físico.
//! 3. Despacho: afinidade (o clock é programado pela CPU alvo), caminho
//!    direto quando já fixado, falhas de fila.
//! 4. Suspensão e tela: recusa imediata, teto, estacionamento do núcleo
//!    secundário e restauração.
//! 5. Concorrência: dois `set_rate` da mesma CPU nunca se sobrepõem.


use super::attr::{ATTR_AVAILABLE_FREQS, ATTR_MFREQ, ATTR_SCREEN_OFF_MAX_FREQ};
use super::config::{CpuFreqConfig, DRIVER_NAME, NO_LIMIT};
use super::{
    CpuFreqCore, CpuFreqDriver, CpuFreqError, DriverFlags, FreqTransition, Policy, Relation,
    SetRateReason, TransitionPhase,
};
use crate::core::power::notifier::NotifierChain;
use crate::core::power::state::{NotifyResult, PmEvent, ScreenEvent};
use crate::core::smp::CpuId;
use mock::{Hotplug, MockPlatform, SetCall, SWITCH_TIME_US, TABLE_MHZ};
use std::sync::Arc;

fn setup_with(
    cpus: usize,
    rate: u32,
    config: CpuFreqConfig,
) -> (Arc<MockPlatform>, CpuFreqCore<MockPlatform>) {
    let platform = MockPlatform::new(cpus, TABLE_MHZ, rate);
    let core = CpuFreqCore::new(platform.clone(), config).unwrap();
    (platform, core)
}

fn setup(cpus: usize, rate: u32) -> (Arc<MockPlatform>, CpuFreqCore<MockPlatform>) {
    setup_with(cpus, rate, CpuFreqConfig::default())
}

fn init_policy(core: &CpuFreqCore<MockPlatform>, cpu: CpuId) -> Policy {
    let mut policy = Policy::new(cpu);
    core.init(&mut policy).unwrap();
    policy
}

fn screen_config(ceiling: u32) -> CpuFreqConfig {
    CpuFreqConfig {
        screen_off_max_freq: ceiling,
        ..CpuFreqConfig::default()
    }
}

// =============================================================================
// INIT / VERIFY / GET
// =============================================================================

#[test]
fn test_init_snaps_current_rate_onto_table() {
    let (platform, core) = setup(2, 650);
    let policy = init_policy(&core, 0);

    assert_eq!(policy.cur, 600);
    assert_eq!(policy.cpuinfo.min_freq, 300);
    assert_eq!(policy.cpuinfo.max_freq, 1200);
    assert_eq!((policy.min, policy.max), (300, 1200));
    assert_eq!(policy.cpuinfo.transition_latency_ns, SWITCH_TIME_US * 1000);
    assert_eq!(
        platform.set_calls(),
        vec![SetCall {
            cpu: 0,
            rate: 600,
            reason: SetRateReason::CpuFreq,
            ran_on: None,
        }]
    );
    assert_eq!(core.limits(0).unwrap().hardware_bounds(), Some((300, 1200)));
}

#[test]
fn test_init_falls_back_to_at_least_below_the_table() {
    let (platform, core) = setup(1, 100);
    let policy = init_policy(&core, 0);
    assert_eq!(policy.cur, 300);
    assert_eq!(platform.rate(0), 300);
}

#[test]
fn test_init_on_table_entry_does_not_touch_clock() {
    let (platform, core) = setup(1, 900);
    let policy = init_policy(&core, 0);
    assert_eq!(policy.cur, 900);
    assert!(platform.set_calls().is_empty());
}

#[test]
fn test_init_propagates_clock_failure() {
    let (platform, core) = setup(1, 650);
    platform.fail_next_set(-5);
    let mut policy = Policy::new(0);
    assert_eq!(core.init(&mut policy), Err(CpuFreqError::HardwareFailure(-5)));
}

#[test]
fn test_init_with_empty_table_is_invalid() {
    let platform = MockPlatform::new(1, &[], 600);
    let core = CpuFreqCore::new(platform.clone(), CpuFreqConfig::default()).unwrap();
    let mut policy = Policy::new(0);
    assert_eq!(core.init(&mut policy), Err(CpuFreqError::InvalidTarget));
    assert!(!core.limits(0).unwrap().is_initialized());
}

#[test]
fn test_init_applies_fixed_limits() {
    let config = CpuFreqConfig {
        fixed_limits: Some((600, 900)),
        ..CpuFreqConfig::default()
    };
    let (platform, core) = setup_with(1, 1200, config);
    let policy = init_policy(&core, 0);

    assert_eq!((policy.min, policy.max), (600, 900));
    assert_eq!((policy.cpuinfo.min_freq, policy.cpuinfo.max_freq), (600, 900));
    assert_eq!(policy.cur, 900);
    assert_eq!(platform.rate(0), 900);
}

#[test]
fn test_verify_clamps_into_cpuinfo() {
    let (_platform, core) = setup(1, 600);
    let mut policy = init_policy(&core, 0);

    policy.min = 100;
    policy.max = 5_000;
    assert!(core.verify(&mut policy).is_ok());
    assert_eq!((policy.min, policy.max), (300, 1200));

    policy.min = 1_000;
    policy.max = 500;
    assert!(core.verify(&mut policy).is_ok());
    assert_eq!((policy.min, policy.max), (500, 500));
}

#[test]
fn test_driver_identity() {
    let (platform, core) = setup(2, 900);
    assert_eq!(core.name(), DRIVER_NAME);
    assert!(core.flags().contains(DriverFlags::STICKY | DriverFlags::CONST_LOOPS));
    assert_eq!(core.get(1), platform.rate(1));
}

#[test]
fn test_new_without_cpus_fails() {
    let platform = MockPlatform::new(0, TABLE_MHZ, 600);
    assert!(matches!(
        CpuFreqCore::new(platform, CpuFreqConfig::default()),
        Err(CpuFreqError::ResourceExhausted)
    ));
}

// =============================================================================
// LIMITES
// =============================================================================

#[test]
fn test_limits_clamp_resolved_target() {
    let (platform, core) = setup(2, 600);
    let policy = init_policy(&core, 0);
    let _pin = mock::pin_current_thread(0);

    core.set_freq_limits(0, 400, 1000).unwrap();
    let limits = core.limits(0).unwrap();
    assert_eq!((limits.allowed_min(), limits.allowed_max()), (400, 1000));

    assert!(core.target(&policy, 1100, Relation::Low).is_ok());
    assert_eq!(platform.rate(0), 1000);
}

#[test]
fn test_no_limit_restores_hardware_bounds() {
    let (_platform, core) = setup(1, 600);
    core.set_freq_limits(0, 600, 600).unwrap();
    core.set_freq_limits(0, NO_LIMIT, NO_LIMIT).unwrap();
    let limits = core.limits(0).unwrap();
    assert_eq!((limits.allowed_min(), limits.allowed_max()), (300, 1200));
}

#[test]
fn test_set_freq_limits_before_init_discovers_table() {
    let (_platform, core) = setup(1, 600);
    core.set_freq_limits(0, 400, NO_LIMIT).unwrap();
    let limits = core.limits(0).unwrap();
    assert!(limits.is_initialized());
    assert_eq!((limits.allowed_min(), limits.allowed_max()), (400, 1200));
}

#[test]
fn test_set_freq_limits_on_unknown_cpu() {
    let (_platform, core) = setup(2, 600);
    assert_eq!(
        core.set_freq_limits(7, 400, 1000),
        Err(CpuFreqError::DeviceUnavailable)
    );
    assert!(core.limits(7).is_none());
}

#[test]
fn test_target_without_table_entry_is_invalid() {
    let (platform, core) = setup(1, 600);
    let policy = init_policy(&core, 0);
    let _pin = mock::pin_current_thread(0);

    assert_eq!(
        core.target(&policy, 1300, Relation::Low),
        Err(CpuFreqError::InvalidTarget)
    );
    assert!(platform.set_calls().is_empty());
}

// =============================================================================
// APLICAÇÃO
// =============================================================================

#[test]
fn test_transition_notifications_wrap_the_clock_change() {
    let (platform, core) = setup(1, 600);
    let policy = init_policy(&core, 0);
    let _pin = mock::pin_current_thread(0);

    core.target(&policy, 900, Relation::Low).unwrap();

    let freqs = FreqTransition {
        cpu: 0,
        old: 600,
        new: 900,
    };
    assert_eq!(
        platform.transitions(),
        vec![
            (freqs, TransitionPhase::PreChange),
            (freqs, TransitionPhase::PostChange),
        ]
    );
}

#[test]
fn test_hardware_failure_emits_only_prechange() {
    let (platform, core) = setup(1, 600);
    let policy = init_policy(&core, 0);
    let _pin = mock::pin_current_thread(0);

    platform.fail_next_set(-16);
    let err = core.target(&policy, 900, Relation::Low).unwrap_err();

    assert_eq!(err, CpuFreqError::HardwareFailure(-16));
    assert_eq!(err.as_status(), -16);
    assert_eq!(platform.rate(0), 600);

    let phases: Vec<TransitionPhase> = platform.transitions().iter().map(|t| t.1).collect();
    assert_eq!(phases, vec![TransitionPhase::PreChange]);
}

#[test]
fn test_manual_override_forces_hardware_max() {
    let (platform, core) = setup(1, 600);
    let mut policy = init_policy(&core, 0);
    let _pin = mock::pin_current_thread(0);

    assert_eq!(core.store_mfreq("1\n"), Ok(2));
    assert!(core.manual_override());

    core.set_freq_limits(0, 300, 600).unwrap();
    core.target(&policy, 300, Relation::Low).unwrap();
    assert_eq!(platform.rate(0), 1200);

    // Já no máximo: nada a fazer.
    policy.cur = platform.rate(0);
    platform.clear_calls();
    core.target(&policy, 300, Relation::Low).unwrap();
    assert!(platform.set_calls().is_empty());

    assert_eq!(core.store_mfreq("bogus"), Err(CpuFreqError::InvalidArgument));
    assert!(core.manual_override());

    assert_eq!(core.store_mfreq("0"), Ok(1));
    assert!(!core.manual_override());
}

#[test]
fn test_screen_cap_below_allowed_min_yields_allowed_min() {
    let config = CpuFreqConfig {
        park_secondary_on_screen_off: false,
        ..screen_config(594)
    };
    let (platform, core) = setup_with(1, 600, config);
    let policy = init_policy(&core, 0);
    let _pin = mock::pin_current_thread(0);

    core.set_freq_limits(0, 900, NO_LIMIT).unwrap();
    core.screen_off();
    platform.clear_calls();

    core.target(&policy, 1200, Relation::Low).unwrap();
    assert_eq!(platform.rate(0), 900);
    assert_eq!(platform.set_calls().len(), 1);
}

#[test]
fn test_programmed_rate_stays_inside_allowed_limits() {
    let limit_pairs = [(300, 1200), (600, 1200), (900, NO_LIMIT), (300, 600), (1200, 300)];

    for ceiling in [0, 300, 594, 1000] {
        let config = CpuFreqConfig {
            park_secondary_on_screen_off: false,
            ..screen_config(ceiling)
        };
        let (platform, core) = setup_with(1, 600, config);
        let policy = init_policy(&core, 0);
        let _pin = mock::pin_current_thread(0);

        for &(min, max) in &limit_pairs {
            core.set_freq_limits(0, min, max).unwrap();
            let limits = core.limits(0).unwrap();
            let allowed = limits.allowed_min()..=limits.allowed_max();

            for screen_off in [false, true] {
                if screen_off {
                    core.screen_off();
                }
                for &freq in TABLE_MHZ {
                    platform.clear_calls();
                    core.target(&policy, freq, Relation::Low).unwrap();

                    let calls = platform.set_calls();
                    assert_eq!(calls.len(), 1);
                    for call in calls.iter().filter(|c| c.reason == SetRateReason::CpuFreq) {
                        assert!(
                            allowed.contains(&call.rate),
                            "teto={} limites={:?} alvo={} programado={}",
                            ceiling,
                            allowed,
                            freq,
                            call.rate
                        );
                    }
                }
                if screen_off {
                    core.screen_on();
                }
            }
        }
    }
}

// =============================================================================
// SUSPENSÃO
// =============================================================================

#[test]
fn test_suspended_cpu_rejects_targets_via_pm_chain() {
    let (platform, core) = setup(2, 600);
    let policy = init_policy(&core, 0);
    let _pin = mock::pin_current_thread(0);

    let pm: NotifierChain<PmEvent> = NotifierChain::new();
    let screen: NotifierChain<ScreenEvent> = NotifierChain::new();
    core.register(&pm, &screen);

    assert_eq!(pm.call_chain(PmEvent::SuspendPrepare), NotifyResult::Done);
    assert_eq!(core.is_suspended(0), Some(true));
    assert_eq!(core.is_suspended(1), Some(true));

    assert_eq!(
        core.target(&policy, 900, Relation::Low),
        Err(CpuFreqError::DeviceSuspended)
    );
    assert!(platform.set_calls().is_empty());

    pm.call_chain(PmEvent::PostSuspend);
    assert_eq!(core.is_suspended(0), Some(false));
    assert!(core.target(&policy, 900, Relation::Low).is_ok());
    assert_eq!(platform.rate(0), 900);

    pm.call_chain(PmEvent::HibernationPrepare);
    assert_eq!(core.is_suspended(1), Some(true));
    pm.call_chain(PmEvent::PostHibernation);
    assert_eq!(core.is_suspended(1), Some(false));
}

#[test]
fn test_unrecognized_pm_event_is_acknowledged() {
    let (_platform, core) = setup(1, 600);
    assert_eq!(core.pm_event(PmEvent::RestorePrepare), NotifyResult::Done);
    assert_eq!(core.pm_event(PmEvent::PostRestore), NotifyResult::Done);
    assert_eq!(core.is_suspended(0), Some(false));
    assert_eq!(PmEvent::from_raw(3), Some(PmEvent::SuspendPrepare));
    assert_eq!(PmEvent::from_raw(42), None);
}

#[test]
fn test_unregister_removes_handlers() {
    let (_platform, core) = setup(1, 600);
    let pm: NotifierChain<PmEvent> = NotifierChain::new();
    let screen: NotifierChain<ScreenEvent> = NotifierChain::new();

    core.register(&pm, &screen);
    assert_eq!((pm.len(), screen.len()), (1, 1));

    core.unregister(&pm, &screen);
    assert!(pm.is_empty() && screen.is_empty());

    pm.call_chain(PmEvent::SuspendPrepare);
    assert_eq!(core.is_suspended(0), Some(false));
}

// =============================================================================
// TELA
// =============================================================================

#[test]
fn test_screen_off_caps_parks_secondary_and_screen_on_restores() {
    let (platform, core) = setup_with(2, 1200, screen_config(594));
    init_policy(&core, 0);
    init_policy(&core, 1);
    platform.clear_calls();

    let pm: NotifierChain<PmEvent> = NotifierChain::new();
    let screen: NotifierChain<ScreenEvent> = NotifierChain::new();
    core.register(&pm, &screen);

    screen.call_chain(ScreenEvent::EarlySuspend);

    assert_eq!(platform.rate(0), 594);
    assert_eq!(platform.rate(1), 594);
    assert_eq!(core.capped_freq(), 594);
    assert!(!platform.is_online(1));
    assert_eq!(platform.hotplug_log(), vec![Hotplug::Down(1)]);
    assert!(platform
        .set_calls()
        .iter()
        .all(|c| c.reason == SetRateReason::ScreenCap));
    assert!(platform.transitions().is_empty());

    screen.call_chain(ScreenEvent::LateResume);

    assert_eq!(core.capped_freq(), 0);
    assert_eq!(platform.rate(0), 1200);
    assert_eq!(platform.rate(1), 1200);
    assert!(platform.is_online(1));
    assert_eq!(
        platform.hotplug_log(),
        vec![Hotplug::Down(1), Hotplug::Up(1)]
    );
}

#[test]
fn test_screen_off_leaves_slower_cpus_alone() {
    let (platform, core) = setup_with(2, 300, screen_config(594));
    init_policy(&core, 0);
    platform.clear_calls();

    core.screen_off();
    assert_eq!(core.capped_freq(), 594);
    assert!(platform.set_calls().is_empty());
    assert_eq!(platform.rate(0), 300);
}

#[test]
fn test_screen_off_without_ceiling_only_parks() {
    let (platform, core) = setup_with(2, 1200, screen_config(0));
    init_policy(&core, 0);
    platform.clear_calls();

    core.screen_off();
    assert_eq!(core.capped_freq(), 0);
    assert!(platform.set_calls().is_empty());
    assert_eq!(platform.hotplug_log(), vec![Hotplug::Down(1)]);
}

#[test]
fn test_cap_holds_later_targets_until_screen_on() {
    let config = CpuFreqConfig {
        screen_off_max_freq: 594,
        park_secondary_on_screen_off: false,
        ..CpuFreqConfig::default()
    };
    let (platform, core) = setup_with(1, 600, config);
    let mut policy = init_policy(&core, 0);
    let _pin = mock::pin_current_thread(0);

    core.screen_off();
    assert_eq!(platform.rate(0), 594);

    policy.cur = platform.rate(0);
    core.target(&policy, 1200, Relation::Low).unwrap();
    assert_eq!(platform.rate(0), 594);

    core.screen_on();
    assert_eq!(platform.rate(0), 1200);
    assert!(platform.hotplug_log().is_empty());
}

#[test]
fn test_screen_on_without_cap_keeps_rates() {
    let (platform, core) = setup_with(2, 900, screen_config(594));
    init_policy(&core, 0);
    init_policy(&core, 1);
    platform.clear_calls();

    core.screen_on();
    assert!(platform.set_calls().is_empty());
    assert!(platform.hotplug_log().is_empty());
}

// =============================================================================
// ATRIBUTOS
// =============================================================================

#[test]
fn test_screen_off_attribute_resolves_at_most() {
    let (_platform, core) = setup(2, 600);
    let policy = init_policy(&core, 1);

    assert_eq!(
        core.show_attr(ATTR_SCREEN_OFF_MAX_FREQ, &policy).unwrap(),
        "594000\n"
    );

    assert_eq!(core.store_attr(ATTR_SCREEN_OFF_MAX_FREQ, &policy, "1000\n"), Ok(5));
    assert_eq!(core.screen_off_max_freq(), 900);
    assert_eq!(core.show_screen_off_freq(), "900\n");

    for bad in ["100", "abc", ""] {
        assert_eq!(
            core.store_attr(ATTR_SCREEN_OFF_MAX_FREQ, &policy, bad),
            Err(CpuFreqError::InvalidArgument)
        );
    }
    assert_eq!(core.screen_off_max_freq(), 900);
}

#[test]
fn test_attribute_modes_are_enforced() {
    let (_platform, core) = setup(1, 600);
    let policy = init_policy(&core, 0);

    assert_eq!(core.attributes().len(), 3);
    assert_eq!(
        core.show_attr(ATTR_AVAILABLE_FREQS, &policy).unwrap(),
        "300 600 900 1200\n"
    );
    assert_eq!(
        core.show_attr(ATTR_MFREQ, &policy),
        Err(CpuFreqError::InvalidArgument)
    );
    assert_eq!(
        core.store_attr(ATTR_AVAILABLE_FREQS, &policy, "300"),
        Err(CpuFreqError::InvalidArgument)
    );
    assert_eq!(
        core.store_attr("scaling_governor", &policy, "performance"),
        Err(CpuFreqError::InvalidArgument)
    );
    assert_eq!(core.store_attr(ATTR_MFREQ, &policy, "0x1"), Ok(3));
    assert!(core.manual_override());
}

// =============================================================================
// DESPACHO ENTRE CPUS
// =============================================================================

#[cfg(feature = "smp")]
mod dispatch {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_cross_core_request_runs_on_target_cpu() {
        let (platform, core) = setup(2, 600);
        let policy = init_policy(&core, 1);
        platform.clear_calls();

        let _pin = mock::pin_current_thread(0);
        core.target(&policy, 900, Relation::Low).unwrap();

        assert_eq!(platform.rate(1), 900);
        assert_eq!(platform.queued(), 1);
        let calls = platform.set_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].ran_on, Some(1));
    }

    #[test]
    fn test_unpinned_caller_is_dispatched() {
        let (platform, core) = setup(2, 600);
        let policy = init_policy(&core, 0);
        platform.clear_calls();

        core.target(&policy, 1200, Relation::High).unwrap();
        assert_eq!(platform.rate(0), 1200);
        assert_eq!(platform.set_calls()[0].ran_on, Some(0));
    }

    #[test]
    fn test_pinned_caller_applies_directly() {
        let (platform, core) = setup(2, 600);
        let policy = init_policy(&core, 1);
        platform.clear_calls();

        let _pin = mock::pin_current_thread(1);
        core.target(&policy, 300, Relation::Low).unwrap();

        assert_eq!(platform.rate(1), 300);
        assert_eq!(platform.queued(), 0);
    }

    #[test]
    fn test_inactive_cpu_fails_fast() {
        let (platform, core) = setup(2, 600);
        let policy = init_policy(&core, 1);
        platform.clear_calls();
        platform.set_active(1, false);

        assert_eq!(
            core.target(&policy, 900, Relation::Low),
            Err(CpuFreqError::DeviceUnavailable)
        );
        assert_eq!(platform.queued(), 0);
        assert!(platform.set_calls().is_empty());
    }

    #[test]
    fn test_queue_failure_reports_resource_exhausted() {
        let (platform, core) = setup(2, 600);
        let policy = init_policy(&core, 1);
        platform.clear_calls();

        platform.set_fail_queue(true);
        assert_eq!(
            core.target(&policy, 900, Relation::Low),
            Err(CpuFreqError::ResourceExhausted)
        );
        assert!(platform.set_calls().is_empty());

        platform.set_fail_queue(false);
        assert!(core.target(&policy, 900, Relation::Low).is_ok());
        assert_eq!(platform.rate(1), 900);
    }

    #[test]
    fn test_remote_failure_reaches_the_caller() {
        let (platform, core) = setup(2, 600);
        let policy = init_policy(&core, 1);

        platform.fail_next_set(-110);
        assert_eq!(
            core.target(&policy, 900, Relation::Low),
            Err(CpuFreqError::HardwareFailure(-110))
        );
        assert_eq!(platform.rate(1), 600);
    }

    #[test]
    fn test_concurrent_targets_never_overlap() {
        let (platform, core) = setup(2, 600);
        let policy = init_policy(&core, 1);
        platform.clear_calls();
        platform.set_delay(Duration::from_micros(200));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let core = core.clone();
                thread::spawn(move || {
                    let _pin = (i % 2 == 0).then(|| mock::pin_current_thread(1));
                    for n in 0..10u32 {
                        let freq = TABLE_MHZ[((i + n) % 4) as usize];
                        core.target(&policy, freq, Relation::Low).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(!platform.overlapped());
        assert_eq!(platform.set_calls().len(), 40);
        assert!(platform.set_calls().iter().all(|c| c.ran_on == Some(1)));
    }

    #[test]
    fn test_screen_transitions_race_with_targets_without_overlap() {
        let config = CpuFreqConfig {
            park_secondary_on_screen_off: false,
            ..screen_config(594)
        };
        let (platform, core) = setup_with(2, 1200, config);
        let policy = init_policy(&core, 1);
        platform.clear_calls();
        platform.set_delay(Duration::from_micros(200));

        let screen = {
            let core = core.clone();
            thread::spawn(move || {
                for _ in 0..10 {
                    core.screen_off();
                    core.screen_on();
                }
            })
        };

        let targets: Vec<_> = (0..3u32)
            .map(|i| {
                let core = core.clone();
                thread::spawn(move || {
                    let _pin = (i == 0).then(|| mock::pin_current_thread(1));
                    (0..10u32)
                        .map(|n| {
                            let freq = TABLE_MHZ[((i + n) % 4) as usize];
                            core.target(&policy, freq, Relation::Low)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        screen.join().unwrap();
        for handle in targets {
            assert!(handle.join().unwrap().iter().all(Result::is_ok));
        }

        assert!(!platform.overlapped());
        assert_eq!(core.capped_freq(), 0);
        assert!(platform
            .set_calls()
            .iter()
            .filter(|c| c.reason == SetRateReason::CpuFreq)
            .all(|c| c.ran_on == Some(1)));
    }
}
