//! Input resolver
//!
//! Runs before the state machine on every tick and writes the pending
//! [`Input`] into the [`CycleContext`]:
//!
//! | State          | Release                     | Hold                          |
//! |----------------|-----------------------------|-------------------------------|
//! | IDLE           | next program                | ≥ start hold: confirm         |
//! | running phase  | pause (if in pause scope)   | ignored                       |
//! | PAUSE          | ignored                     | ≥ resume hold: resume phase   |
//!
//! A hold that was acted upon latches until the button is released, and
//! that release is swallowed. Otherwise the press that starts a cycle
//! would pause it again on release, and the press that resumes from PAUSE
//! would immediately pause again.

use crate::config::{InputTimings, PauseScope};
use crate::state::{CycleContext, Input, ManualProgram, State};
use crate::traits::{Button, Indicator, IndicatorPanel};

/// Maps button activity plus cycle state into the pending input
#[derive(Debug, Clone)]
pub struct InputResolver {
    timings: InputTimings,
    pause_scope: PauseScope,
    /// A hold was consumed; the next release belongs to it
    hold_latched: bool,
}

impl InputResolver {
    /// Create a resolver
    pub fn new(timings: InputTimings, pause_scope: PauseScope) -> Self {
        Self {
            timings,
            pause_scope,
            hold_latched: false,
        }
    }

    /// Check if a consumed hold is waiting for its release
    pub fn hold_latched(&self) -> bool {
        self.hold_latched
    }

    /// Poll the button and update the pending input
    pub fn resolve<B, P>(&mut self, ctx: &mut CycleContext, button: &mut B, indicators: &mut P)
    where
        B: Button,
        P: IndicatorPanel,
    {
        let mut released = button.was_released();
        if released && self.hold_latched {
            self.hold_latched = false;
            released = false;
        }

        match ctx.current_state {
            State::Idle => self.resolve_idle(ctx, button, released, indicators),
            State::Pause => self.resolve_paused(ctx, button),
            state => {
                if released && self.pause_scope.allows(state) {
                    ctx.pending_input = Some(Input::Pause);
                }
            }
        }
    }

    fn resolve_idle<B, P>(&mut self, ctx: &mut CycleContext, button: &B, released: bool, indicators: &mut P)
    where
        B: Button,
        P: IndicatorPanel,
    {
        if released {
            ctx.selected_program = Some(match ctx.selected_program {
                Some(program) => program.next(),
                None => ManualProgram::Fill,
            });
        }

        // Confirming requires something to confirm
        if !self.hold_latched
            && ctx.selected_program.is_some()
            && button.pressed_for(self.timings.start_hold_ms)
        {
            ctx.ready_to_start = true;
            self.hold_latched = true;
        }

        ctx.pending_input = ctx.selected_program.map(ManualProgram::input);
        show_selection(indicators, ctx.selected_program);
    }

    fn resolve_paused<B: Button>(&mut self, ctx: &mut CycleContext, button: &B) {
        if self.hold_latched || !button.pressed_for(self.timings.resume_hold_ms) {
            return;
        }

        if let Some(resume) = ctx.last_active_before_pause.and_then(Input::resume_for) {
            ctx.pending_input = Some(resume);
            self.hold_latched = true;
        }
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new(InputTimings::default(), PauseScope::default())
    }
}

/// Light exactly the indicator of the selected program
fn show_selection<P: IndicatorPanel>(indicators: &mut P, selected: Option<ManualProgram>) {
    let lit = selected.map(ManualProgram::indicator);
    for indicator in Indicator::ALL {
        indicators.set_lit(indicator, lit == Some(indicator));
    }
}
