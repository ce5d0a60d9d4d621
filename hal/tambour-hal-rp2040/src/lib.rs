//! RP2040-specific HAL for the washing machine firmware
//!
//! This crate provides RP2040 implementations of the shared `tambour-hal`
//! traits, plus RP2040-specific functionality:
//!
//! - GPIO wrappers over embassy-rp `Output` / `Input`
//! - Pin string parsing and allocation tracking
//! - Taking pins by number for board-map driven setup

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pins;

pub use gpio::{parse_pin_string, GpioAllocator, PinSpec, RpInput, RpOutput, GPIO_COUNT};
pub use pins::{PinBank, PinError};
