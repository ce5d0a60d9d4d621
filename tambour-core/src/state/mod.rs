//! Cycle state machine
//!
//! Defines the authoritative runtime behavior of the machine.
//! The state machine is explicit, finite, and deterministic.

pub mod context;
pub mod cycle;
pub mod input;
pub mod machine;
pub mod transition;

pub use context::CycleContext;
pub use cycle::CycleMachine;
pub use input::{Input, ManualProgram};
pub use machine::{State, StateChange};
pub use transition::{Guard, Transition, TransitionTable, MAX_TRANSITIONS};
