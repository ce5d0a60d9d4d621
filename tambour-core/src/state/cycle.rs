//! Cycle state machine
//!
//! Owns the [`CycleContext`], the transition table and the WASH-phase
//! [`MotorOscillator`]. One call to [`CycleMachine::tick`] performs, in
//! order:
//!
//! 1. dwell timeout check (may force the pending input)
//! 2. guard evaluation in declared order
//! 3. at most one transition: exit → entry → steady-state actions
//! 4. otherwise the steady-state action of the current state
//!
//! Steady-state actions re-assert actuator levels every tick and are
//! idempotent. The oscillator only advances from WASH's steady-state
//! action, so leaving WASH in a tick also stops it for that tick.

use super::context::CycleContext;
use super::input::Input;
use super::machine::{State, StateChange};
use super::transition::{self, TransitionTable};
use crate::config::{CycleConfig, DwellOnResume};
use crate::time::{elapsed_ms, Millis};
use crate::traits::{Actuator, Direction, Indicator, IndicatorPanel, Level, OutputDriver};
use crate::wash::{MotorOscillator, OscillationEvent};

/// Wash cycle state machine
#[derive(Debug, Clone)]
pub struct CycleMachine {
    config: CycleConfig,
    ctx: CycleContext,
    transitions: TransitionTable,
    oscillator: MotorOscillator,
    oscillation_event: Option<OscillationEvent>,
}

impl CycleMachine {
    /// Create a machine in IDLE
    ///
    /// No outputs are touched until [`start`](Self::start) is called.
    pub fn new(config: CycleConfig) -> Self {
        Self {
            config,
            ctx: CycleContext::new(0),
            transitions: transition::build_table(config.pause_scope),
            oscillator: MotorOscillator::new(config.oscillation),
            oscillation_event: None,
        }
    }

    /// Enter IDLE and assert its outputs
    pub fn start<O, P>(&mut self, now: Millis, outputs: &mut O, indicators: &mut P)
    where
        O: OutputDriver,
        P: IndicatorPanel,
    {
        self.ctx = CycleContext::new(now);
        self.on_entering(State::Idle, indicators);
        self.on_state(State::Idle, now, outputs, indicators);
    }

    /// Get the active state
    pub fn state(&self) -> State {
        self.ctx.current_state
    }

    /// Get the cycle record
    pub fn context(&self) -> &CycleContext {
        &self.ctx
    }

    /// Get the cycle record for the input resolver
    pub fn context_mut(&mut self) -> &mut CycleContext {
        &mut self.ctx
    }

    /// Get the configuration
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Get the WASH-phase oscillator
    pub fn oscillator(&self) -> &MotorOscillator {
        &self.oscillator
    }

    /// Oscillation phase change performed during the last tick
    pub fn oscillation_event(&self) -> Option<OscillationEvent> {
        self.oscillation_event
    }

    /// Time spent in the active state (ms)
    pub fn time_in_state(&self, now: Millis) -> u32 {
        elapsed_ms(now, self.ctx.entered_at)
    }

    /// Time left before the active state's dwell expires, if it has one
    pub fn remaining_dwell(&self, now: Millis) -> Option<u32> {
        self.config
            .timings
            .dwell_for(self.ctx.current_state)
            .map(|dwell| dwell.saturating_sub(self.time_in_state(now)))
    }

    /// Check if the active state's dwell has expired
    ///
    /// Strictly greater: the timeout does not fire at exactly the dwell.
    pub fn dwell_expired(&self, now: Millis) -> bool {
        match self.config.timings.dwell_for(self.ctx.current_state) {
            Some(dwell) => self.time_in_state(now) > dwell,
            None => false,
        }
    }

    /// Run one scheduler tick
    ///
    /// Returns the transition taken, if any.
    pub fn tick<O, P>(&mut self, now: Millis, outputs: &mut O, indicators: &mut P) -> Option<StateChange>
    where
        O: OutputDriver,
        P: IndicatorPanel,
    {
        self.oscillation_event = None;

        if self.dwell_expired(now) {
            self.ctx.pending_input = Input::timeout_for(self.ctx.current_state);
        }

        let target = transition::select(&self.transitions, &self.ctx).map(|t| t.to);

        match target {
            Some(to) => Some(self.transition_to(to, now, outputs, indicators)),
            None => {
                self.on_state(self.ctx.current_state, now, outputs, indicators);
                None
            }
        }
    }

    fn transition_to<O, P>(
        &mut self,
        to: State,
        now: Millis,
        outputs: &mut O,
        indicators: &mut P,
    ) -> StateChange
    where
        O: OutputDriver,
        P: IndicatorPanel,
    {
        let from = self.ctx.current_state;

        self.on_leaving(from, indicators);

        if to == State::Pause {
            self.ctx.last_active_before_pause = Some(from);
            self.ctx.pause_entered_at = Some(now);
            self.ctx.dwell_elapsed_before_pause = self.time_in_state(now);
        }

        let entered_at = if from == State::Pause {
            self.resume_timestamp(now)
        } else {
            now
        };

        self.ctx.current_state = to;
        self.ctx.entered_at = entered_at;

        self.on_entering(to, indicators);
        self.on_state(to, now, outputs, indicators);
        self.ctx.pending_input = None;

        StateChange { from, to }
    }

    /// Entry timestamp for the phase being resumed from PAUSE
    fn resume_timestamp(&mut self, now: Millis) -> Millis {
        let spent = self.ctx.dwell_elapsed_before_pause;
        let paused_at = self.ctx.pause_entered_at.take().unwrap_or(now);

        match self.config.dwell_on_resume {
            DwellOnResume::Continue => now.wrapping_sub(spent),
            DwellOnResume::Restart => now,
            DwellOnResume::CountPaused => paused_at.wrapping_sub(spent),
        }
    }

    /// Entry actions
    fn on_entering<P: IndicatorPanel>(&mut self, state: State, indicators: &mut P) {
        let blink = self.config.blink.phase_ms;

        match state {
            State::Idle => {
                self.ctx.selected_program = None;
                self.ctx.ready_to_start = false;
                self.oscillator.reset();
            }
            State::Fill => {
                self.ctx.ready_to_start = false;
                indicators.start_blink(Indicator::Fill, blink);
            }
            State::Wash => {
                self.ctx.ready_to_start = false;
                self.oscillator.reset();
                indicators.start_blink(Indicator::Wash, blink);
            }
            State::Drain | State::Spin => {
                self.ctx.ready_to_start = false;
                indicators.start_blink(Indicator::Drain, blink);
            }
            State::Pause => {}
        }
    }

    /// Steady-state actions, asserted on every tick
    fn on_state<O, P>(&mut self, state: State, now: Millis, outputs: &mut O, indicators: &mut P)
    where
        O: OutputDriver,
        P: IndicatorPanel,
    {
        match state {
            State::Idle => {
                outputs.all_off();
            }
            State::Fill => {
                outputs.set_actuator(Actuator::FillValve, Level::On);
            }
            State::Wash => {
                outputs.set_actuator(Actuator::FillValve, Level::Off);
                self.oscillation_event = self.oscillator.advance(now, outputs);
            }
            State::Drain => {
                outputs.set_actuator(Actuator::MotorPower, Level::Off);
                outputs.set_direction(Direction::Clockwise);
                outputs.set_actuator(Actuator::DrainValve, Level::On);
            }
            State::Spin => {
                // Drain must be open before the motor spins up
                outputs.set_actuator(Actuator::MotorPower, Level::Off);
                outputs.set_direction(Direction::Clockwise);
                outputs.set_actuator(Actuator::DrainValve, Level::On);
                outputs.set_actuator(Actuator::MotorPower, Level::On);
            }
            State::Pause => {
                outputs.all_off();
                if let Some(indicator) = self.ctx.last_active_before_pause.and_then(|s| s.indicator()) {
                    indicators.start_blink(indicator, self.config.blink.paused_ms);
                }
            }
        }
    }

    /// Exit actions
    fn on_leaving<P: IndicatorPanel>(&mut self, state: State, indicators: &mut P) {
        match state {
            State::Idle => indicators.clear_all(),
            State::Fill => indicators.set_blink_enabled(Indicator::Fill, false),
            State::Wash => indicators.set_blink_enabled(Indicator::Wash, false),
            State::Drain | State::Spin => indicators.set_blink_enabled(Indicator::Drain, false),
            State::Pause => {}
        }
    }
}

impl Default for CycleMachine {
    fn default() -> Self {
        Self::new(CycleConfig::default())
    }
}
