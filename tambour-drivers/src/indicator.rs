//! Blinking indicator LEDs
//!
//! The cycle logic only configures each indicator (blink period, blink
//! enable, steady level). [`IndicatorBank::update`] must be called
//! periodically to render that configuration onto the pins.

use tambour_core::time::{elapsed_ms, Millis};
use tambour_core::traits::{Indicator, IndicatorPanel};
use tambour_hal::{OutputPin, Polarity};

/// Blink timing for a single indicator
///
/// A period is one full on+off cycle; the LED is lit for the first half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blinker {
    period_ms: u32,
    enabled: bool,
    lit: bool,
    /// Start of the current blink run, set on the first update after enabling
    started_at: Option<Millis>,
}

impl Blinker {
    /// Create a dark, non-blinking indicator
    pub const fn new() -> Self {
        Self {
            period_ms: 0,
            enabled: false,
            lit: false,
            started_at: None,
        }
    }

    /// Set the blink period
    pub fn set_period(&mut self, period_ms: u32) {
        self.period_ms = period_ms;
    }

    /// Start or stop blinking
    ///
    /// Re-enabling an already blinking indicator keeps its phase.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.started_at = None;
        }
        self.enabled = enabled;
    }

    /// Set the steady level
    pub fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
    }

    /// Blink period in milliseconds
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Check if blinking
    pub fn is_blinking(&self) -> bool {
        self.enabled
    }

    /// Logical LED state at `now`
    pub fn output(&mut self, now: Millis) -> bool {
        if !self.enabled {
            return self.lit;
        }

        let half = self.period_ms / 2;
        if half == 0 {
            return true;
        }

        let started = *self.started_at.get_or_insert(now);
        (elapsed_ms(now, started) / half).is_multiple_of(2)
    }
}

/// Indicator panel backed by GPIO pins
pub struct IndicatorBank<P> {
    pins: [P; Indicator::COUNT],
    blinkers: [Blinker; Indicator::COUNT],
    polarity: Polarity,
}

impl<P: OutputPin> IndicatorBank<P> {
    /// Create a bank with all LEDs off
    ///
    /// Pins are given in [`Indicator::ALL`] order.
    pub fn new(pins: [P; Indicator::COUNT], polarity: Polarity) -> Self {
        let mut bank = Self {
            pins,
            blinkers: [Blinker::new(); Indicator::COUNT],
            polarity,
        };
        for pin in bank.pins.iter_mut() {
            pin.set_state(polarity.level_for(false));
        }
        bank
    }

    /// Render every indicator onto its pin
    pub fn update(&mut self, now: Millis) {
        for (pin, blinker) in self.pins.iter_mut().zip(self.blinkers.iter_mut()) {
            pin.set_state(self.polarity.level_for(blinker.output(now)));
        }
    }

    /// Blink state of an indicator
    pub fn blinker(&self, indicator: Indicator) -> &Blinker {
        &self.blinkers[indicator.index()]
    }

    /// Pin driving an indicator
    pub fn pin(&self, indicator: Indicator) -> &P {
        &self.pins[indicator.index()]
    }
}

impl<P: OutputPin> IndicatorPanel for IndicatorBank<P> {
    fn set_blink_period(&mut self, indicator: Indicator, period_ms: u32) {
        self.blinkers[indicator.index()].set_period(period_ms);
    }

    fn set_blink_enabled(&mut self, indicator: Indicator, enabled: bool) {
        self.blinkers[indicator.index()].set_enabled(enabled);
    }

    fn set_lit(&mut self, indicator: Indicator, lit: bool) {
        self.blinkers[indicator.index()].set_lit(lit);
    }
}
