//! Motor oscillation controller
//!
//! A counter-driven duty-cycle sequencer. Each effective step re-derives the
//! motor command from three counters:
//!
//! 1. motor off and rested long enough → start in the current direction
//! 2. run count reached → stop and flip the direction
//! 3. motor off → count one rest step
//! 4. count one run step
//!
//! The run counter keeps counting while resting, so every run after the
//! first is shortened by the rest period. With the standard profile the
//! pattern is 5 s on, 2 s rest, 3 s on, 2 s rest, ...
//!
//! The oscillator paces itself: [`MotorOscillator::advance`] may be called
//! at any polling rate, and a step only takes effect once per
//! [`OscillationProfile::step_interval_ms`].

use crate::config::OscillationProfile;
use crate::time::{elapsed_ms, Millis};
use crate::traits::{Actuator, Direction, Level, OutputDriver};

/// Counters driving the duty cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OscillationState {
    /// Direction of the next (or current) run
    pub direction: Direction,
    /// Steps since the motor was last switched off
    pub on_ticks: u8,
    /// Consecutive steps the motor has been resting
    pub rest_ticks: u8,
    /// Motor power currently requested
    pub motor_running: bool,
}

impl OscillationState {
    /// Initial counters for a profile: clockwise, fully rested
    pub fn initial(profile: &OscillationProfile) -> Self {
        Self {
            direction: Direction::Clockwise,
            on_ticks: 0,
            rest_ticks: profile.rest_duration,
            motor_running: false,
        }
    }
}

/// Phase change reported by a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OscillationEvent {
    /// Motor switched on in the given direction
    MotorOn(Direction),
    /// Motor switched off; the next run will use `next`
    MotorOff {
        /// Direction of the next run
        next: Direction,
    },
}

/// WASH-phase motor oscillation controller
#[derive(Debug, Clone)]
pub struct MotorOscillator {
    profile: OscillationProfile,
    state: OscillationState,
    last_advanced_at: Option<Millis>,
}

impl MotorOscillator {
    /// Create an oscillator in its initial state
    pub fn new(profile: OscillationProfile) -> Self {
        Self {
            profile,
            state: OscillationState::initial(&profile),
            last_advanced_at: None,
        }
    }

    /// Restore the initial state
    ///
    /// The next call to [`advance`](Self::advance) takes effect immediately.
    pub fn reset(&mut self) {
        self.state = OscillationState::initial(&self.profile);
        self.last_advanced_at = None;
    }

    /// Current counters
    pub fn state(&self) -> &OscillationState {
        &self.state
    }

    /// Active duty-cycle profile
    pub fn profile(&self) -> &OscillationProfile {
        &self.profile
    }

    /// Advance the duty cycle if a step is due
    ///
    /// Call once per outer tick while in WASH. Returns the phase change
    /// performed by the step, if any.
    pub fn advance<O: OutputDriver>(&mut self, now: Millis, outputs: &mut O) -> Option<OscillationEvent> {
        if let Some(last) = self.last_advanced_at {
            if elapsed_ms(now, last) < self.profile.step_interval_ms {
                return None;
            }
        }
        self.last_advanced_at = Some(now);
        self.step(outputs)
    }

    /// Perform one duty-cycle step
    fn step<O: OutputDriver>(&mut self, outputs: &mut O) -> Option<OscillationEvent> {
        let on_duration = self.profile.on_duration;
        let rest_duration = self.profile.rest_duration;
        let mut event = None;

        if self.state.on_ticks <= on_duration && self.state.rest_ticks == rest_duration {
            outputs.set_direction(self.state.direction);
            outputs.set_actuator(Actuator::MotorPower, Level::On);
            self.state.motor_running = true;
            self.state.rest_ticks = 0;
            event = Some(OscillationEvent::MotorOn(self.state.direction));
        }

        if self.state.on_ticks == on_duration {
            outputs.set_actuator(Actuator::MotorPower, Level::Off);
            self.state.motor_running = false;
            self.state.direction = self.state.direction.opposite();
            self.state.on_ticks = 0;
            outputs.set_direction(self.state.direction);
            event = Some(OscillationEvent::MotorOff {
                next: self.state.direction,
            });
        }

        if !self.state.motor_running {
            self.state.rest_ticks = self.state.rest_ticks.saturating_add(1);
        }

        self.state.on_ticks = self.state.on_ticks.saturating_add(1);

        event
    }
}
