//! Board wiring
//!
//! Pin strings use the `tambour_hal_rp2040::parse_pin_string` format:
//! `!` marks an active-low pin and `^` enables the internal pull-up.

use tambour_core::traits::{Actuator, Indicator};
use tambour_hal_rp2040::{parse_pin_string, GpioAllocator, PinError, PinSpec};

/// Pin strings for one controller board
pub struct BoardMap {
    /// Relay inputs in `Actuator::ALL` order
    pub relays: [&'static str; Actuator::COUNT],
    /// Front-panel push button
    pub button: &'static str,
    /// Indicator LEDs in `Indicator::ALL` order
    pub leds: [&'static str; Indicator::COUNT],
}

/// Pico with a four-channel active-low relay module
///
/// Motor power GPIO5, motor direction GPIO4, fill valve GPIO3, drain valve
/// GPIO2. Button to ground on GPIO6, LEDs on GPIO7-9.
pub const PICO_RELAY_BOARD: BoardMap = BoardMap {
    relays: ["!gpio5", "!gpio4", "!gpio3", "!gpio2"],
    button: "^!gpio6",
    leds: ["gpio7", "gpio8", "gpio9"],
};

/// Parsed and conflict-checked board wiring
#[derive(Debug, Clone, Copy)]
pub struct BoardPins {
    pub relays: [PinSpec; Actuator::COUNT],
    pub button: PinSpec,
    pub leds: [PinSpec; Indicator::COUNT],
}

impl BoardMap {
    /// Parse every pin string and reject reused pins
    pub fn resolve(&self) -> Result<BoardPins, PinError> {
        let mut alloc = GpioAllocator::new();
        let mut claim = |s: &str| -> Result<PinSpec, PinError> {
            let spec = parse_pin_string(s).ok_or(PinError::InvalidSpec)?;
            if !alloc.allocate(spec.pin) {
                return Err(PinError::AlreadyTaken);
            }
            Ok(spec)
        };

        let mut relays = [PinSpec::default(); Actuator::COUNT];
        for (spec, s) in relays.iter_mut().zip(self.relays) {
            *spec = claim(s)?;
        }
        let button = claim(self.button)?;
        let mut leds = [PinSpec::default(); Indicator::COUNT];
        for (spec, s) in leds.iter_mut().zip(self.leds) {
            *spec = claim(s)?;
        }

        Ok(BoardPins {
            relays,
            button,
            leds,
        })
    }
}
