//! Cycle configuration
//!
//! Groups the timing constants with the two pause-overlay policies.

use super::timing::{BlinkRates, CycleTimings, InputTimings, OscillationProfile};
use crate::state::State;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Phases from which the cycle may be paused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PauseScope {
    /// Only the WASH phase can be paused
    WashOnly,
    /// FILL, WASH, DRAIN and SPIN can all be paused
    #[default]
    AnyActivePhase,
}

impl PauseScope {
    /// Check if `state` can be paused under this scope
    pub fn allows(self, state: State) -> bool {
        match self {
            PauseScope::WashOnly => state == State::Wash,
            PauseScope::AnyActivePhase => state.is_active_phase(),
        }
    }
}

/// How time spent in PAUSE is charged to the resumed phase's dwell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DwellOnResume {
    /// Dwell clock is frozen while paused; the phase continues where it stopped
    #[default]
    Continue,
    /// The resumed phase starts a full dwell
    Restart,
    /// Paused time counts toward the dwell as if the phase had kept running
    CountPaused,
}

/// Complete cycle configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CycleConfig {
    /// Phase dwell durations
    pub timings: CycleTimings,
    /// WASH-phase motor duty cycle
    pub oscillation: OscillationProfile,
    /// Button hold thresholds
    pub input: InputTimings,
    /// Indicator blink periods
    pub blink: BlinkRates,
    /// Phases that can be paused
    pub pause_scope: PauseScope,
    /// Dwell clock policy on resume
    pub dwell_on_resume: DwellOnResume,
}

impl CycleConfig {
    /// Production configuration
    pub const STANDARD: Self = Self {
        timings: CycleTimings::STANDARD,
        oscillation: OscillationProfile::STANDARD,
        input: InputTimings::STANDARD,
        blink: BlinkRates::STANDARD,
        pause_scope: PauseScope::AnyActivePhase,
        dwell_on_resume: DwellOnResume::Continue,
    };

    /// Production configuration with the gentle agitation profile
    pub const GENTLE: Self = Self {
        oscillation: OscillationProfile::GENTLE,
        ..Self::STANDARD
    };
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}
