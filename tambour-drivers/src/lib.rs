//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tambour-core on top of the GPIO traits from tambour-hal:
//!
//! - Relay bank for motor power, motor direction and both valves
//! - Blinking indicator LEDs
//! - Debounced push button with hold timing

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod indicator;
pub mod relay;

#[cfg(test)]
pub(crate) mod mock;

pub use button::{DebouncedButton, DEBOUNCE_MS};
pub use indicator::{Blinker, IndicatorBank};
pub use relay::RelayBank;
