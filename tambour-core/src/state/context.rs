//! Mutable cycle record shared by the state machine and the input resolver

use super::input::{Input, ManualProgram};
use super::machine::State;
use crate::time::Millis;

/// Mutable cycle record
///
/// Created once at startup in IDLE and never destroyed. Only the
/// [`CycleMachine`](super::CycleMachine) and the
/// [`InputResolver`](crate::input::InputResolver) write to it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleContext {
    /// Active state
    pub current_state: State,
    /// Clock reading when the active state was entered
    pub entered_at: Millis,
    /// Latest resolved input, consumed by transition guards
    pub pending_input: Option<Input>,
    /// Program chosen in IDLE (none until the first release)
    pub selected_program: Option<ManualProgram>,
    /// Selection confirmed by a long press
    pub ready_to_start: bool,
    /// Phase that was running when PAUSE was entered
    pub last_active_before_pause: Option<State>,
    /// Clock reading when PAUSE was entered
    pub pause_entered_at: Option<Millis>,
    /// Dwell already spent in the paused phase when PAUSE was entered
    pub dwell_elapsed_before_pause: u32,
}

impl CycleContext {
    /// Create a context in IDLE
    pub fn new(now: Millis) -> Self {
        Self {
            current_state: State::Idle,
            entered_at: now,
            pending_input: None,
            selected_program: None,
            ready_to_start: false,
            last_active_before_pause: None,
            pause_entered_at: None,
            dwell_elapsed_before_pause: 0,
        }
    }
}

impl Default for CycleContext {
    fn default() -> Self {
        Self::new(0)
    }
}
