//! GPIO wrappers and pin allocation
//!
//! Wraps embassy-rp pins so drivers can use the chip-independent
//! `tambour_hal` traits, and tracks which GPIOs the board map has claimed.

use embassy_rp::gpio::{Input, Output};
use heapless::FnvIndexSet;
use tambour_hal::{InputPin, OutputPin, Polarity};

/// Number of user GPIOs on RP2040
pub const GPIO_COUNT: usize = 30;

/// Push-pull output pin
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Wrap an embassy output
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Digital input pin
pub struct RpInput<'d> {
    pin: Input<'d>,
}

impl<'d> RpInput<'d> {
    /// Wrap an embassy input
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// GPIO allocator to catch board maps that reuse a pin
pub struct GpioAllocator {
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    /// Create an empty allocator
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Claim a pin
    ///
    /// Returns `false` if the pin number is out of range or already claimed.
    pub fn allocate(&mut self, pin: u8) -> bool {
        if pin as usize >= GPIO_COUNT || self.allocated.contains(&pin) {
            return false;
        }
        self.allocated.insert(pin).is_ok()
    }

    /// Check if a pin is claimed
    pub fn is_allocated(&self, pin: u8) -> bool {
        self.allocated.contains(&pin)
    }

    /// Number of claimed pins
    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }
}

/// Parsed board-map pin entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinSpec {
    /// GPIO number
    pub pin: u8,
    /// Electrical polarity
    pub polarity: Polarity,
    /// Enable the internal pull-up (inputs only)
    pub pull_up: bool,
}

/// Parse a pin string from the board map
///
/// Supports formats:
/// - "gpio5" -> GPIO5, active-high
/// - "!gpio5" -> GPIO5, active-low
/// - "^gpio6" -> GPIO6 with pull-up
/// - "^!gpio6" / "!^gpio6" -> both
pub fn parse_pin_string(s: &str) -> Option<PinSpec> {
    let mut s = s.trim();
    let mut polarity = Polarity::ActiveHigh;
    let mut pull_up = false;

    loop {
        if let Some(rest) = s.strip_prefix('!') {
            polarity = Polarity::ActiveLow;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    let pin: u8 = s.strip_prefix("gpio")?.parse().ok()?;
    if pin as usize >= GPIO_COUNT {
        return None;
    }

    Some(PinSpec {
        pin,
        polarity,
        pull_up,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator() {
        let mut alloc = GpioAllocator::new();

        assert!(alloc.allocate(5));
        assert!(alloc.is_allocated(5));

        // Can't allocate same pin twice
        assert!(!alloc.allocate(5));

        assert!(alloc.allocate(6));
        assert!(!alloc.allocate(30));
        assert_eq!(alloc.allocated_count(), 2);
    }

    #[test]
    fn test_parse_pin_string() {
        let spec = parse_pin_string("gpio5").unwrap();
        assert_eq!(spec.pin, 5);
        assert_eq!(spec.polarity, Polarity::ActiveHigh);
        assert!(!spec.pull_up);

        let spec = parse_pin_string("!gpio4").unwrap();
        assert_eq!(spec.polarity, Polarity::ActiveLow);

        let spec = parse_pin_string("^!gpio6").unwrap();
        assert_eq!(spec.pin, 6);
        assert_eq!(spec.polarity, Polarity::ActiveLow);
        assert!(spec.pull_up);

        assert_eq!(parse_pin_string("gpio29").map(|s| s.pin), Some(29));

        // Invalid
        assert_eq!(parse_pin_string("gpio30"), None);
        assert_eq!(parse_pin_string("pin11"), None);
        assert_eq!(parse_pin_string(""), None);
    }
}
