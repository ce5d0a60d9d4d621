//! Transition table
//!
//! Transitions are declared once, in priority order, and evaluated top to
//! bottom. The first transition out of the current state whose guard holds
//! is taken; at most one fires per tick.

use heapless::Vec;

use super::context::CycleContext;
use super::input::{Input, ManualProgram};
use super::machine::State;
use crate::config::PauseScope;

/// Upper bound on declared transitions
///
/// 7 cycle transitions plus 4 into PAUSE and 4 out of it.
pub const MAX_TRANSITIONS: usize = 16;

/// Ordered transition table
pub type TransitionTable = Vec<Transition, MAX_TRANSITIONS>;

/// Predicate gating a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Guard {
    /// Holds when the pending input equals the given input
    Input(Input),
    /// Holds when the pending input equals the given input and the manual
    /// selection has been confirmed
    ConfirmedInput(Input),
}

impl Guard {
    /// Evaluate the guard against the cycle context
    pub fn holds(&self, ctx: &CycleContext) -> bool {
        match *self {
            Guard::Input(input) => ctx.pending_input == Some(input),
            Guard::ConfirmedInput(input) => {
                ctx.ready_to_start && ctx.pending_input == Some(input)
            }
        }
    }
}

/// A guarded transition between two states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Source state
    pub from: State,
    /// Target state
    pub to: State,
    /// Gate
    pub guard: Guard,
}

impl Transition {
    /// Create a transition
    pub const fn new(from: State, to: State, guard: Guard) -> Self {
        Self { from, to, guard }
    }

    /// Check if this transition can fire from the context's current state
    pub fn is_enabled(&self, ctx: &CycleContext) -> bool {
        self.from == ctx.current_state && self.guard.holds(ctx)
    }
}

/// IDLE transition starting a confirmed manual selection
const fn manual_start(program: ManualProgram) -> Transition {
    Transition::new(
        State::Idle,
        program.target_state(),
        Guard::ConfirmedInput(program.input()),
    )
}

/// Transitions of the wash cycle, in priority order
const CYCLE_TRANSITIONS: [Transition; 7] = [
    manual_start(ManualProgram::Fill),
    manual_start(ManualProgram::Wash),
    manual_start(ManualProgram::Drain),
    Transition::new(State::Fill, State::Wash, Guard::Input(Input::StartWash)),
    Transition::new(State::Wash, State::Drain, Guard::Input(Input::StartDrain)),
    Transition::new(State::Drain, State::Spin, Guard::Input(Input::StartSpin)),
    Transition::new(State::Spin, State::Idle, Guard::Input(Input::StartIdle)),
];

const PAUSABLE_PHASES: [State; 4] = [State::Fill, State::Wash, State::Drain, State::Spin];

// Every phase can carry a pause and a resume transition
const _: () = assert!(CYCLE_TRANSITIONS.len() + 2 * PAUSABLE_PHASES.len() <= MAX_TRANSITIONS);

/// Build the transition table for a pause scope
///
/// The cycle transitions come first so a dwell timeout always wins over a
/// pause request; PAUSE transitions are only declared for phases in scope.
pub fn build_table(scope: PauseScope) -> TransitionTable {
    let mut table = TransitionTable::new();

    for transition in CYCLE_TRANSITIONS {
        push(&mut table, transition);
    }

    for phase in PAUSABLE_PHASES.into_iter().filter(|p| scope.allows(*p)) {
        push(&mut table, Transition::new(phase, State::Pause, Guard::Input(Input::Pause)));
        if let Some(resume) = Input::resume_for(phase) {
            push(&mut table, Transition::new(State::Pause, phase, Guard::Input(resume)));
        }
    }

    table
}

fn push(table: &mut TransitionTable, transition: Transition) {
    let pushed = table.push(transition).is_ok();
    debug_assert!(pushed, "transition table full");
}

/// First enabled transition out of the current state
pub fn select<'a>(table: &'a [Transition], ctx: &CycleContext) -> Option<&'a Transition> {
    table.iter().find(|t| t.is_enabled(ctx))
}
