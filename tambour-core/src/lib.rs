//! Board-agnostic core logic for the washing machine firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (actuator outputs, indicators, button)
//! - Cycle state machine (IDLE → FILL → WASH → DRAIN → SPIN, plus PAUSE)
//! - Motor oscillation controller for the WASH phase
//! - Input resolver mapping button activity to cycle inputs
//! - Fixed configuration constants
//!
//! Everything is driven from a single cooperative tick; see
//! [`controller::Controller`].

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod input;
pub mod state;
pub mod time;
pub mod traits;
pub mod wash;

#[cfg(test)]
pub(crate) mod test_support;

pub use controller::{Controller, TickReport};
