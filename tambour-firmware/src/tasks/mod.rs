//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod controller;
pub mod tick;

pub use controller::{controller_task, Hardware};
pub use tick::tick_task;
