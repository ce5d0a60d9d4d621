//! WASH-phase motor control
//!
//! The drum motor is never run continuously in one direction while
//! washing; the oscillator alternates run, rest and reverse.

pub mod oscillator;

pub use oscillator::{MotorOscillator, OscillationEvent, OscillationState};
