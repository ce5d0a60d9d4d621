//! Button trait
//!
//! The machine has a single push button. Debouncing and hold timing are the
//! driver's job; the cycle logic only sees the two queries below.

/// Trait for a debounced push button
pub trait Button {
    /// Check whether the button was released since the last call
    ///
    /// Edge-triggered: returns `true` once per release and clears the flag.
    fn was_released(&mut self) -> bool;

    /// Check whether the button is currently held for at least `duration_ms`
    ///
    /// Level-triggered: keeps returning `true` on every poll while the hold
    /// continues past the threshold.
    fn pressed_for(&self, duration_ms: u32) -> bool;
}
