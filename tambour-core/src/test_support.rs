//! Mock collaborators for unit tests

use heapless::Vec;

use crate::traits::{Actuator, Button, Indicator, IndicatorPanel, Level, OutputDriver};

/// Output driver that records every write in order
pub struct RecordingOutputs {
    levels: [Level; Actuator::COUNT],
    log: Vec<(Actuator, Level), 256>,
}

impl RecordingOutputs {
    pub fn new() -> Self {
        Self {
            levels: [Level::Off; Actuator::COUNT],
            log: Vec::new(),
        }
    }

    /// Last level written to an actuator
    pub fn level(&self, actuator: Actuator) -> Level {
        self.levels[actuator.index()]
    }

    /// Number of recorded writes of `level` to `actuator`
    pub fn count(&self, actuator: Actuator, level: Level) -> usize {
        self.log.iter().filter(|w| **w == (actuator, level)).count()
    }

    /// Log position of the first write of `level` to `actuator`
    pub fn position(&self, actuator: Actuator, level: Level) -> Option<usize> {
        self.log.iter().position(|w| *w == (actuator, level))
    }

    /// Forget the write log (levels are kept)
    pub fn clear(&mut self) {
        self.log.clear();
    }
}

impl OutputDriver for RecordingOutputs {
    fn set_actuator(&mut self, actuator: Actuator, level: Level) {
        self.levels[actuator.index()] = level;
        // Long runs overflow the log; only the levels matter then
        let _ = self.log.push((actuator, level));
    }
}

/// Indicator state as last commanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorState {
    pub period_ms: u32,
    pub blinking: bool,
    pub lit: bool,
}

/// Indicator panel that keeps the last commanded state
#[derive(Default)]
pub struct RecordingIndicators {
    states: [IndicatorState; Indicator::COUNT],
}

impl RecordingIndicators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, indicator: Indicator) -> IndicatorState {
        self.states[indicator.index()]
    }
}

impl IndicatorPanel for RecordingIndicators {
    fn set_blink_period(&mut self, indicator: Indicator, period_ms: u32) {
        self.states[indicator.index()].period_ms = period_ms;
    }

    fn set_blink_enabled(&mut self, indicator: Indicator, enabled: bool) {
        self.states[indicator.index()].blinking = enabled;
    }

    fn set_lit(&mut self, indicator: Indicator, lit: bool) {
        self.states[indicator.index()].lit = lit;
    }
}

/// Button whose next poll result is set by the test
#[derive(Default)]
pub struct ScriptedButton {
    pub released: bool,
    pub held_ms: Option<u32>,
}

impl ScriptedButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn release(&mut self) {
        self.held_ms = None;
        self.released = true;
    }

    pub fn hold(&mut self, ms: u32) {
        self.held_ms = Some(ms);
    }
}

impl Button for ScriptedButton {
    fn was_released(&mut self) -> bool {
        core::mem::take(&mut self.released)
    }

    fn pressed_for(&self, duration_ms: u32) -> bool {
        self.held_ms.is_some_and(|held| held >= duration_ms)
    }
}
