//! Inputs consumed by transition guards

use super::machine::State;
use crate::traits::Indicator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Resolved input signal
///
/// At most one input is pending at a time. `Start*` inputs are produced by
/// dwell timeouts and resume requests, `Manual*` inputs by the IDLE
/// selection, and `Pause` by a press during a running phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Input {
    /// Return to IDLE
    StartIdle,
    /// Enter (or resume) FILL
    StartFill,
    /// Enter (or resume) WASH
    StartWash,
    /// Enter (or resume) DRAIN
    StartDrain,
    /// Enter (or resume) SPIN
    StartSpin,
    /// Manual selection: FILL
    ManualFill,
    /// Manual selection: WASH
    ManualWash,
    /// Manual selection: DRAIN
    ManualDrain,
    /// Pause the running phase
    Pause,
}

impl Input {
    /// Input forced by the dwell timeout of `state`
    pub fn timeout_for(state: State) -> Option<Self> {
        match state {
            State::Fill => Some(Input::StartWash),
            State::Wash => Some(Input::StartDrain),
            State::Drain => Some(Input::StartSpin),
            State::Spin => Some(Input::StartIdle),
            State::Idle | State::Pause => None,
        }
    }

    /// Input that resumes a paused `phase`
    pub fn resume_for(phase: State) -> Option<Self> {
        match phase {
            State::Fill => Some(Input::StartFill),
            State::Wash => Some(Input::StartWash),
            State::Drain => Some(Input::StartDrain),
            State::Spin => Some(Input::StartSpin),
            State::Idle | State::Pause => None,
        }
    }
}

/// Program chosen by cycling the selection in IDLE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ManualProgram {
    /// Start the cycle at FILL
    Fill,
    /// Start the cycle at WASH
    Wash,
    /// Start the cycle at DRAIN
    Drain,
}

impl ManualProgram {
    /// Number of selectable programs
    pub const COUNT: u8 = 3;

    /// Selection index (0..=2)
    pub const fn index(self) -> u8 {
        match self {
            ManualProgram::Fill => 0,
            ManualProgram::Wash => 1,
            ManualProgram::Drain => 2,
        }
    }

    /// Program at a selection index, wrapping out-of-range values
    pub const fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => ManualProgram::Fill,
            1 => ManualProgram::Wash,
            _ => ManualProgram::Drain,
        }
    }

    /// Next program, wrapping from DRAIN to FILL
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous program, wrapping from FILL to DRAIN
    pub const fn previous(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// Input this selection resolves to
    pub const fn input(self) -> Input {
        match self {
            ManualProgram::Fill => Input::ManualFill,
            ManualProgram::Wash => Input::ManualWash,
            ManualProgram::Drain => Input::ManualDrain,
        }
    }

    /// Indicator that shows this selection
    pub fn indicator(self) -> Indicator {
        match self {
            ManualProgram::Fill => Indicator::Fill,
            ManualProgram::Wash => Indicator::Wash,
            ManualProgram::Drain => Indicator::Drain,
        }
    }

    /// Phase the cycle starts in
    pub const fn target_state(self) -> State {
        match self {
            ManualProgram::Fill => State::Fill,
            ManualProgram::Wash => State::Wash,
            ManualProgram::Drain => State::Drain,
        }
    }
}
