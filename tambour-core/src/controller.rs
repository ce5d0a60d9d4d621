//! Controller coordinating the input resolver and the cycle state machine
//!
//! The controller is the single entry point for the scheduler loop. Each
//! tick:
//!
//! 1. the input resolver polls the button and updates the pending input
//! 2. the cycle state machine runs its tick (timeouts, guards, actions)
//!
//! All state lives in the controller; collaborators are passed in by
//! reference on every call.

use crate::config::CycleConfig;
use crate::input::InputResolver;
use crate::state::{CycleContext, CycleMachine, State, StateChange};
use crate::time::Millis;
use crate::traits::{Button, IndicatorPanel, OutputDriver};
use crate::wash::OscillationEvent;

/// What happened during one tick, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Transition taken, if any
    pub state_change: Option<StateChange>,
    /// WASH oscillation phase change, if any
    pub oscillation: Option<OscillationEvent>,
}

/// Washing machine controller
#[derive(Debug, Clone)]
pub struct Controller {
    machine: CycleMachine,
    resolver: InputResolver,
}

impl Controller {
    /// Create a controller
    pub fn new(config: CycleConfig) -> Self {
        Self {
            machine: CycleMachine::new(config),
            resolver: InputResolver::new(config.input, config.pause_scope),
        }
    }

    /// Enter IDLE and force every output to its safe position
    pub fn start<O, P>(&mut self, now: Millis, outputs: &mut O, indicators: &mut P)
    where
        O: OutputDriver,
        P: IndicatorPanel,
    {
        self.machine.start(now, outputs, indicators);
    }

    /// Run one scheduler tick
    pub fn tick<B, O, P>(
        &mut self,
        now: Millis,
        button: &mut B,
        outputs: &mut O,
        indicators: &mut P,
    ) -> TickReport
    where
        B: Button,
        O: OutputDriver,
        P: IndicatorPanel,
    {
        self.resolver
            .resolve(self.machine.context_mut(), button, indicators);
        let state_change = self.machine.tick(now, outputs, indicators);

        TickReport {
            state_change,
            oscillation: self.machine.oscillation_event(),
        }
    }

    /// Get the active state
    pub fn state(&self) -> State {
        self.machine.state()
    }

    /// Get the cycle record
    pub fn context(&self) -> &CycleContext {
        self.machine.context()
    }

    /// Get the state machine
    pub fn machine(&self) -> &CycleMachine {
        &self.machine
    }

    /// Get the configuration
    pub fn config(&self) -> &CycleConfig {
        self.machine.config()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(CycleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RESUME_HOLD_MS, START_HOLD_MS};
    use crate::state::ManualProgram;
    use crate::test_support::{RecordingIndicators, RecordingOutputs, ScriptedButton};
    use crate::traits::{Actuator, Direction, Indicator};

    struct Rig {
        controller: Controller,
        button: ScriptedButton,
        out: RecordingOutputs,
        ind: RecordingIndicators,
        now: Millis,
    }

    impl Rig {
        fn new() -> Self {
            let mut rig = Self {
                controller: Controller::default(),
                button: ScriptedButton::new(),
                out: RecordingOutputs::new(),
                ind: RecordingIndicators::new(),
                now: 0,
            };
            rig.controller.start(0, &mut rig.out, &mut rig.ind);
            rig
        }

        fn tick(&mut self, advance_ms: u32) -> TickReport {
            self.now += advance_ms;
            self.controller
                .tick(self.now, &mut self.button, &mut self.out, &mut self.ind)
        }

        fn click(&mut self) -> TickReport {
            self.button.release();
            self.tick(50)
        }

        fn hold(&mut self, ms: u32) -> TickReport {
            self.button.hold(ms);
            self.tick(50)
        }
    }

    #[test]
    fn test_select_and_start_drain() {
        let mut rig = Rig::new();

        rig.click();
        rig.click();
        rig.click();
        assert_eq!(rig.controller.context().selected_program, Some(ManualProgram::Drain));

        let report = rig.hold(START_HOLD_MS);

        assert_eq!(
            report.state_change,
            Some(StateChange { from: State::Idle, to: State::Drain })
        );
        assert!(rig.out.level(Actuator::DrainValve).is_on());
        // Selection LEDs are cleared, the drain LED now blinks
        assert!(!rig.ind.get(Indicator::Fill).lit);
        assert!(rig.ind.get(Indicator::Drain).blinking);
    }

    #[test]
    fn test_confirming_release_does_not_pause() {
        let mut rig = Rig::new();
        rig.click();
        rig.hold(START_HOLD_MS);
        assert_eq!(rig.controller.state(), State::Fill);

        let report = rig.click();

        assert_eq!(report.state_change, None);
        assert_eq!(rig.controller.state(), State::Fill);
    }

    #[test]
    fn test_pause_and_resume_wash() {
        let mut rig = Rig::new();
        rig.click();
        rig.click();
        rig.hold(START_HOLD_MS);
        rig.button.release();
        rig.tick(50);
        assert_eq!(rig.controller.state(), State::Wash);

        let report = rig.click();
        assert_eq!(
            report.state_change,
            Some(StateChange { from: State::Wash, to: State::Pause })
        );
        assert!(!rig.out.level(Actuator::MotorPower).is_on());

        let report = rig.hold(RESUME_HOLD_MS);
        assert_eq!(
            report.state_change,
            Some(StateChange { from: State::Pause, to: State::Wash })
        );
        assert_eq!(
            report.oscillation,
            Some(OscillationEvent::MotorOn(Direction::Clockwise))
        );

        // Releasing after the resume hold leaves the cycle running
        let report = rig.click();
        assert_eq!(report.state_change, None);
        assert_eq!(rig.controller.state(), State::Wash);
    }

    #[test]
    fn test_reports_oscillation_changes() {
        let mut rig = Rig::new();
        rig.click();
        rig.click();
        rig.hold(START_HOLD_MS);

        let mut offs = 0;
        for _ in 0..100 {
            if let Some(OscillationEvent::MotorOff { .. }) = rig.tick(100).oscillation {
                offs += 1;
            }
        }

        // 10 s of washing: runs end at steps 6 and 11
        assert_eq!(offs, 2);
    }
}
