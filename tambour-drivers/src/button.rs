//! Debounced push button
//!
//! The raw pin is sampled by [`DebouncedButton::poll`]. A level change is
//! accepted once the pin has read the same level for [`DEBOUNCE_MS`].
//! Hold durations are measured from the accepted press edge.

use tambour_core::time::{elapsed_ms, Millis};
use tambour_core::traits::Button;
use tambour_hal::{InputPin, Polarity};

/// Time a level must be stable before it is accepted
pub const DEBOUNCE_MS: u32 = 40;

/// Push button on a GPIO input
pub struct DebouncedButton<P> {
    pin: P,
    polarity: Polarity,
    debounce_ms: u32,
    /// Debounced logical state
    pressed: bool,
    /// Raw level awaiting confirmation, with the time it was first seen
    candidate: Option<(bool, Millis)>,
    /// Accepted press edge
    pressed_since: Option<Millis>,
    /// Release edge not yet consumed
    released: bool,
    /// Time of the last poll
    now: Millis,
}

impl<P: InputPin> DebouncedButton<P> {
    /// Create a button with the default debounce time
    ///
    /// Buttons wired to ground with a pull-up are [`Polarity::ActiveLow`].
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self::with_debounce(pin, polarity, DEBOUNCE_MS)
    }

    /// Create a button with a custom debounce time
    pub fn with_debounce(pin: P, polarity: Polarity, debounce_ms: u32) -> Self {
        Self {
            pin,
            polarity,
            debounce_ms,
            pressed: false,
            candidate: None,
            pressed_since: None,
            released: false,
            now: 0,
        }
    }

    /// Sample the pin
    ///
    /// Call periodically, faster than the debounce time.
    pub fn poll(&mut self, now: Millis) {
        self.now = now;
        let raw = self.polarity.is_active(self.pin.is_high());

        if raw == self.pressed {
            self.candidate = None;
            return;
        }

        match self.candidate {
            Some((level, since)) if level == raw => {
                if elapsed_ms(now, since) >= self.debounce_ms {
                    self.accept(raw, now);
                }
            }
            _ => self.candidate = Some((raw, now)),
        }
    }

    fn accept(&mut self, pressed: bool, now: Millis) {
        self.pressed = pressed;
        self.candidate = None;
        if pressed {
            self.pressed_since = Some(now);
        } else {
            self.pressed_since = None;
            self.released = true;
        }
    }

    /// Debounced pressed state
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Time the button has been held, if pressed
    pub fn held_ms(&self) -> Option<u32> {
        self.pressed_since.map(|since| elapsed_ms(self.now, since))
    }
}

impl<P: InputPin> Button for DebouncedButton<P> {
    fn was_released(&mut self) -> bool {
        core::mem::take(&mut self.released)
    }

    fn pressed_for(&self, duration_ms: u32) -> bool {
        self.held_ms().is_some_and(|held| held >= duration_ms)
    }
}
