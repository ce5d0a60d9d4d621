//! Tambour Hardware Abstraction Layer
//!
//! This crate defines the pin-level traits that chip-specific code
//! implements (the RP2040 wrappers live in `tambour-hal-rp2040`). The relay,
//! indicator and button drivers in `tambour-drivers` are written against
//! these traits only, so they run unchanged on the host for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tambour-firmware (embassy, RP2040)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tambour-drivers (relays, LEDs, button) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tambour-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{InputPin, OutputPin, Polarity};
