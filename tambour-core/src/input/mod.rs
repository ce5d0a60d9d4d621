//! Button-to-input mapping
//!
//! The machine has one button. Its meaning depends on the cycle state:
//! selecting and confirming a program in IDLE, pausing a running phase,
//! resuming from PAUSE.

pub mod resolver;

pub use resolver::InputResolver;
