//! Mock GPIO pins for driver tests

use core::cell::Cell;

use tambour_hal::{InputPin, OutputPin};

/// Mock output pin
pub struct MockPin {
    pub high: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self { high: false }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Mock input pin whose level the test controls
pub struct MockInput {
    pub high: Cell<bool>,
}

impl MockInput {
    pub fn new(high: bool) -> Self {
        Self { high: Cell::new(high) }
    }
}

impl InputPin for MockInput {
    fn is_high(&self) -> bool {
        self.high.get()
    }
}
