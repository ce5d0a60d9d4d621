//! Timing constants
//!
//! Dwell durations, oscillation duty cycle, button hold thresholds and
//! indicator blink rates.

use crate::state::State;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time the fill valve stays open (ms)
pub const FILL_TIME_MS: u32 = 300_000;
/// Time the drum agitates (ms)
pub const WASH_TIME_MS: u32 = 420_000;
/// Time the drain valve stays open before spinning (ms)
pub const DRAIN_TIME_MS: u32 = 180_000;
/// Time the drum spins with the drain open (ms)
pub const SPIN_TIME_MS: u32 = 230_000;

/// Dead time between two oscillation steps (ms)
pub const OSCILLATION_STEP_MS: u32 = 1_000;

/// Hold time that confirms the manual selection (ms)
pub const START_HOLD_MS: u32 = 1_500;
/// Hold time that resumes a paused cycle (ms)
pub const RESUME_HOLD_MS: u32 = 3_000;

/// Blink period of the running phase indicator (ms)
pub const PHASE_BLINK_MS: u32 = 1_000;
/// Blink period of the paused phase indicator (ms)
pub const PAUSED_BLINK_MS: u32 = 250;

/// Dwell durations of the timed phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CycleTimings {
    /// FILL dwell (ms)
    pub fill_ms: u32,
    /// WASH dwell (ms)
    pub wash_ms: u32,
    /// DRAIN dwell (ms)
    pub drain_ms: u32,
    /// SPIN dwell (ms)
    pub spin_ms: u32,
}

impl CycleTimings {
    /// Production cycle durations
    pub const STANDARD: Self = Self {
        fill_ms: FILL_TIME_MS,
        wash_ms: WASH_TIME_MS,
        drain_ms: DRAIN_TIME_MS,
        spin_ms: SPIN_TIME_MS,
    };

    /// Dwell duration of a state, or `None` for states held until input
    pub fn dwell_for(&self, state: State) -> Option<u32> {
        match state {
            State::Fill => Some(self.fill_ms),
            State::Wash => Some(self.wash_ms),
            State::Drain => Some(self.drain_ms),
            State::Spin => Some(self.spin_ms),
            State::Idle | State::Pause => None,
        }
    }
}

impl Default for CycleTimings {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Duty cycle of the WASH-phase motor oscillation
///
/// Counts are in oscillation steps (one step per [`step_interval_ms`]).
///
/// [`step_interval_ms`]: OscillationProfile::step_interval_ms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OscillationProfile {
    /// Step count at which the running motor is stopped and reversed
    pub on_duration: u8,
    /// Idle steps required before the motor is started again
    pub rest_duration: u8,
    /// Minimum time between two effective steps (ms)
    pub step_interval_ms: u32,
}

impl OscillationProfile {
    /// Normal agitation: long runs, two-step rest
    pub const STANDARD: Self = Self {
        on_duration: 5,
        rest_duration: 2,
        step_interval_ms: OSCILLATION_STEP_MS,
    };

    /// Delicate agitation: short runs, one-step rest
    pub const GENTLE: Self = Self {
        on_duration: 3,
        rest_duration: 1,
        step_interval_ms: OSCILLATION_STEP_MS,
    };
}

impl Default for OscillationProfile {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Button hold thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputTimings {
    /// Hold that confirms the selection in IDLE (ms)
    pub start_hold_ms: u32,
    /// Hold that resumes from PAUSE (ms)
    pub resume_hold_ms: u32,
}

impl InputTimings {
    /// Production hold thresholds
    pub const STANDARD: Self = Self {
        start_hold_ms: START_HOLD_MS,
        resume_hold_ms: RESUME_HOLD_MS,
    };
}

impl Default for InputTimings {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Indicator blink periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlinkRates {
    /// Period while a phase is running (ms)
    pub phase_ms: u32,
    /// Period while that phase is paused (ms)
    pub paused_ms: u32,
}

impl BlinkRates {
    /// Production blink periods
    pub const STANDARD: Self = Self {
        phase_ms: PHASE_BLINK_MS,
        paused_ms: PAUSED_BLINK_MS,
    };
}

impl Default for BlinkRates {
    fn default() -> Self {
        Self::STANDARD
    }
}
