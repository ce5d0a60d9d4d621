//! Collaborator traits
//!
//! These traits define the interface between the cycle logic and the
//! hardware-facing drivers. All of them are infallible: relay and LED writes
//! have no failure channel in this design.

pub mod actuator;
pub mod button;
pub mod indicator;

pub use actuator::{Actuator, Direction, Level, OutputDriver};
pub use button::Button;
pub use indicator::{Indicator, IndicatorPanel};
