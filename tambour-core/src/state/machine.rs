//! Machine states
//!
//! All actuator and indicator behavior is a function of the current state.

use crate::traits::Indicator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// Everything off, manual program selection active
    #[default]
    Idle,
    /// Inlet valve open
    Fill,
    /// Drum agitating
    Wash,
    /// Drain open, motor stopped
    Drain,
    /// Drain open, drum spinning
    Spin,
    /// Cycle frozen by the user
    Pause,
}

impl State {
    /// Upper-case name used in diagnostic output
    pub fn name(&self) -> &'static str {
        match self {
            State::Idle => "IDLE",
            State::Fill => "FILL",
            State::Wash => "WASH",
            State::Drain => "DRAIN",
            State::Spin => "SPIN",
            State::Pause => "PAUSE",
        }
    }

    /// Check if this is one of the four timed phases of a running cycle
    pub fn is_active_phase(&self) -> bool {
        matches!(self, State::Fill | State::Wash | State::Drain | State::Spin)
    }

    /// Check if this state allows the fill valve to open
    pub fn fill_allowed(&self) -> bool {
        matches!(self, State::Fill)
    }

    /// Check if this state allows the drain valve to open
    pub fn drain_allowed(&self) -> bool {
        matches!(self, State::Drain | State::Spin)
    }

    /// Check if this state allows the drum motor to run
    pub fn motor_allowed(&self) -> bool {
        matches!(self, State::Wash | State::Spin)
    }

    /// Indicator that shows this phase, if any
    ///
    /// SPIN has no indicator of its own and shares the drain indicator.
    pub fn indicator(&self) -> Option<Indicator> {
        match self {
            State::Fill => Some(Indicator::Fill),
            State::Wash => Some(Indicator::Wash),
            State::Drain | State::Spin => Some(Indicator::Drain),
            State::Idle | State::Pause => None,
        }
    }
}

/// A transition that took place during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateChange {
    /// State that was left
    pub from: State,
    /// State that was entered
    pub to: State,
}
