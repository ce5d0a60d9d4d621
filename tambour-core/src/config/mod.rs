//! Configuration types
//!
//! Cycle durations and thresholds are fixed constants compiled into the
//! firmware. The structs here group them so the state machine and its tests
//! can be built against alternative values.

pub mod timing;
pub mod types;

pub use timing::*;
pub use types::*;
