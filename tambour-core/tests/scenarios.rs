//! End-to-end cycle scenarios driven through the controller

mod common;

use common::Machine;
use tambour_core::config::{
    CycleConfig, PauseScope, FILL_TIME_MS, PAUSED_BLINK_MS, RESUME_HOLD_MS, START_HOLD_MS,
};
use tambour_core::state::{Input, ManualProgram, State, StateChange};
use tambour_core::traits::{Actuator, Indicator, Level};
use tambour_core::wash::OscillationEvent;
use tambour_core::Controller;

fn transitions(machine: &Machine) -> Vec<StateChange> {
    machine.reports.iter().filter_map(|r| r.state_change).collect()
}

#[test]
fn fill_timeout_advances_to_wash() {
    let mut m = Machine::new(Controller::default());
    m.click();
    m.press_for(START_HOLD_MS);
    assert_eq!(m.controller.state(), State::Fill);
    let entered = m.controller.context().entered_at;

    while m.now - entered <= FILL_TIME_MS {
        m.tick();
        if m.controller.state() == State::Fill {
            assert!(m.outputs.is_on(Actuator::FillValve));
        }
    }

    assert_eq!(m.controller.state(), State::Wash);
    assert!(!m.outputs.is_on(Actuator::FillValve));
    assert!(m.panel.led(Indicator::Wash).blinking);
    assert!(!m.panel.led(Indicator::Fill).blinking);
}

#[test]
fn manual_selection_wraps_to_drain_and_starts_it() {
    let mut m = Machine::new(Controller::default());

    m.click();
    m.click();
    m.click();
    assert_eq!(m.controller.context().selected_program, Some(ManualProgram::Drain));
    assert_eq!(m.controller.context().pending_input, Some(Input::ManualDrain));
    assert!(m.panel.led(Indicator::Drain).lit);
    assert!(!m.panel.led(Indicator::Fill).lit);
    assert!(!m.panel.led(Indicator::Wash).lit);

    m.button.press(m.now);
    while !m.controller.context().ready_to_start && m.controller.state() == State::Idle {
        m.tick();
    }

    assert_eq!(
        transitions(&m).last(),
        Some(&StateChange { from: State::Idle, to: State::Drain })
    );
    assert!(m.outputs.is_on(Actuator::DrainValve));
    assert!(!m.outputs.is_on(Actuator::MotorPower));
}

#[test]
fn pause_from_wash_resumes_wash() {
    let mut m = Machine::new(Controller::default());
    m.click();
    m.click();
    m.press_for(START_HOLD_MS);
    assert_eq!(m.controller.state(), State::Wash);
    m.run_for(7_000);

    m.click();
    assert_eq!(m.controller.state(), State::Pause);
    assert_eq!(m.controller.context().last_active_before_pause, Some(State::Wash));
    assert_eq!(m.panel.led(Indicator::Wash).period_ms, PAUSED_BLINK_MS);
    for actuator in Actuator::ALL {
        assert_eq!(m.outputs.level(actuator), Level::Off);
    }

    // A start-length hold is not enough
    m.press_for(START_HOLD_MS);
    assert_eq!(m.controller.state(), State::Pause);

    m.press_for(RESUME_HOLD_MS);
    assert_eq!(m.controller.state(), State::Wash);
    assert_eq!(
        transitions(&m).last(),
        Some(&StateChange { from: State::Pause, to: State::Wash })
    );
}

#[test]
fn pause_is_only_reachable_from_wash_in_wash_only_scope() {
    let config = CycleConfig {
        pause_scope: PauseScope::WashOnly,
        ..CycleConfig::STANDARD
    };
    let mut m = Machine::new(Controller::new(config));
    m.click();
    m.press_for(START_HOLD_MS);
    assert_eq!(m.controller.state(), State::Fill);

    m.click();
    assert_eq!(m.controller.state(), State::Fill);
}

#[test]
fn paused_time_does_not_shorten_the_phase() {
    let mut m = Machine::new(Controller::default());
    m.click();
    m.press_for(START_HOLD_MS);
    let started = m.controller.context().entered_at;

    m.run_for(60_000);
    m.click();
    assert_eq!(m.controller.state(), State::Pause);
    m.run_for(600_000);
    m.press_for(RESUME_HOLD_MS);
    assert_eq!(m.controller.state(), State::Fill);

    let resumed = m.controller.machine().time_in_state(m.now);
    assert!(resumed < FILL_TIME_MS);
    // Only the time actually spent filling counts
    assert!((60_000..=61_000).contains(&resumed), "resumed at {resumed}");
    assert!(m.now - started > FILL_TIME_MS);
}

#[test]
fn full_cycle_respects_output_invariants() {
    let mut m = Machine::new(Controller::default());
    m.click();
    m.press_for(START_HOLD_MS);

    let mut seen_spin = false;
    while m.controller.state() != State::Idle {
        m.tick();
        let state = m.controller.state();
        seen_spin |= state == State::Spin;

        if m.outputs.is_on(Actuator::FillValve) {
            assert!(state.fill_allowed(), "fill open in {state:?}");
        }
        if m.outputs.is_on(Actuator::DrainValve) {
            assert!(state.drain_allowed(), "drain open in {state:?}");
        }
        if m.outputs.is_on(Actuator::MotorPower) {
            assert!(state.motor_allowed(), "motor running in {state:?}");
        }
        if m.outputs.is_on(Actuator::MotorPower) && m.outputs.is_on(Actuator::DrainValve) {
            assert_eq!(state, State::Spin);
        }
    }

    assert!(seen_spin);
    for actuator in Actuator::ALL {
        assert_eq!(m.outputs.level(actuator), Level::Off);
    }
    let states: Vec<State> = transitions(&m).iter().map(|c| c.to).collect();
    assert_eq!(
        states,
        vec![State::Fill, State::Wash, State::Drain, State::Spin, State::Idle]
    );
}

#[test]
fn wash_oscillation_reverses_every_run() {
    let mut m = Machine::new(Controller::default());
    m.click();
    m.click();
    m.press_for(START_HOLD_MS);
    let start = m.reports.len();

    m.run_for(60_000);

    let mut last_dir = None;
    let mut runs = 0;
    for report in &m.reports[start..] {
        if let Some(OscillationEvent::MotorOn(dir)) = report.oscillation {
            if let Some(prev) = last_dir {
                assert_ne!(prev, dir);
            }
            last_dir = Some(dir);
            runs += 1;
        }
    }
    assert!(runs >= 10);
}
