//! Indicator LED trait
//!
//! Three front-panel indicators show the selected or running phase.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Front-panel indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Indicator {
    /// Fill phase indicator
    Fill,
    /// Wash phase indicator
    Wash,
    /// Drain (and spin) phase indicator
    Drain,
}

impl Indicator {
    /// Number of indicators
    pub const COUNT: usize = 3;

    /// All indicators, in panel order
    pub const ALL: [Indicator; Self::COUNT] = [Indicator::Fill, Indicator::Wash, Indicator::Drain];

    /// Position of this indicator on the panel
    pub const fn index(self) -> usize {
        match self {
            Indicator::Fill => 0,
            Indicator::Wash => 1,
            Indicator::Drain => 2,
        }
    }
}

/// Trait for the indicator panel
///
/// A blinking indicator toggles at its configured period. When blinking is
/// disabled the indicator shows its steady level set by [`set_lit`].
///
/// [`set_lit`]: IndicatorPanel::set_lit
pub trait IndicatorPanel {
    /// Set the blink period (full on+off cycle) in milliseconds
    fn set_blink_period(&mut self, indicator: Indicator, period_ms: u32);

    /// Start or stop blinking
    fn set_blink_enabled(&mut self, indicator: Indicator, enabled: bool);

    /// Set the steady level shown while not blinking
    fn set_lit(&mut self, indicator: Indicator, lit: bool);

    /// Blink an indicator at the given period
    fn start_blink(&mut self, indicator: Indicator, period_ms: u32) {
        self.set_blink_period(indicator, period_ms);
        self.set_blink_enabled(indicator, true);
    }

    /// Turn an indicator fully off
    fn clear(&mut self, indicator: Indicator) {
        self.set_blink_enabled(indicator, false);
        self.set_lit(indicator, false);
    }

    /// Turn every indicator fully off
    fn clear_all(&mut self) {
        for indicator in Indicator::ALL {
            self.clear(indicator);
        }
    }
}
