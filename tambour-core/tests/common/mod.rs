//! Shared mock collaborators for integration tests

#![allow(dead_code)]

use tambour_core::time::Millis;
use tambour_core::traits::{Actuator, Button, Indicator, IndicatorPanel, Level, OutputDriver};
use tambour_core::{Controller, TickReport};

/// Output bank that keeps levels and a full write log
#[derive(Default)]
pub struct MockOutputs {
    pub levels: [Level; Actuator::COUNT],
    pub log: Vec<(Actuator, Level)>,
}

impl MockOutputs {
    pub fn level(&self, actuator: Actuator) -> Level {
        self.levels[actuator.index()]
    }

    pub fn is_on(&self, actuator: Actuator) -> bool {
        self.level(actuator).is_on()
    }
}

impl OutputDriver for MockOutputs {
    fn set_actuator(&mut self, actuator: Actuator, level: Level) {
        self.levels[actuator.index()] = level;
        self.log.push((actuator, level));
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Led {
    pub period_ms: u32,
    pub blinking: bool,
    pub lit: bool,
}

#[derive(Default)]
pub struct MockPanel {
    pub leds: [Led; Indicator::COUNT],
}

impl MockPanel {
    pub fn led(&self, indicator: Indicator) -> Led {
        self.leds[indicator.index()]
    }
}

impl IndicatorPanel for MockPanel {
    fn set_blink_period(&mut self, indicator: Indicator, period_ms: u32) {
        self.leds[indicator.index()].period_ms = period_ms;
    }

    fn set_blink_enabled(&mut self, indicator: Indicator, enabled: bool) {
        self.leds[indicator.index()].blinking = enabled;
    }

    fn set_lit(&mut self, indicator: Indicator, lit: bool) {
        self.leds[indicator.index()].lit = lit;
    }
}

/// Button driven by wall-clock press/release calls
#[derive(Default)]
pub struct MockButton {
    pressed_since: Option<Millis>,
    released: bool,
    now: Millis,
}

impl MockButton {
    pub fn press(&mut self, now: Millis) {
        self.pressed_since = Some(now);
    }

    pub fn release(&mut self) {
        if self.pressed_since.take().is_some() {
            self.released = true;
        }
    }

    pub fn set_time(&mut self, now: Millis) {
        self.now = now;
    }
}

impl Button for MockButton {
    fn was_released(&mut self) -> bool {
        std::mem::take(&mut self.released)
    }

    fn pressed_for(&self, duration_ms: u32) -> bool {
        self.pressed_since
            .is_some_and(|since| self.now.wrapping_sub(since) >= duration_ms)
    }
}

/// Controller plus mocks, ticked at a fixed polling interval
pub struct Machine {
    pub controller: Controller,
    pub button: MockButton,
    pub outputs: MockOutputs,
    pub panel: MockPanel,
    pub now: Millis,
    pub reports: Vec<TickReport>,
}

pub const POLL_MS: u32 = 50;

impl Machine {
    pub fn new(controller: Controller) -> Self {
        let mut machine = Self {
            controller,
            button: MockButton::default(),
            outputs: MockOutputs::default(),
            panel: MockPanel::default(),
            now: 0,
            reports: Vec::new(),
        };
        machine
            .controller
            .start(0, &mut machine.outputs, &mut machine.panel);
        machine
    }

    pub fn tick(&mut self) -> TickReport {
        self.now += POLL_MS;
        self.button.set_time(self.now);
        let report =
            self.controller
                .tick(self.now, &mut self.button, &mut self.outputs, &mut self.panel);
        self.reports.push(report);
        report
    }

    /// Keep ticking for `ms` milliseconds
    pub fn run_for(&mut self, ms: u32) {
        let end = self.now + ms;
        while self.now < end {
            self.tick();
        }
    }

    /// Press and release after `ms` of holding
    pub fn press_for(&mut self, ms: u32) {
        self.button.press(self.now);
        self.run_for(ms);
        self.button.release();
        self.tick();
    }

    /// Short press
    pub fn click(&mut self) {
        self.press_for(100);
    }
}
