//! Relay bank driver
//!
//! Four relays switch the mains side of the machine: drum motor power, drum
//! direction, fill valve and drain valve. Each relay input has its own
//! polarity since cheap relay modules are commonly active-low.

use tambour_core::traits::{Actuator, Level, OutputDriver};
use tambour_hal::{OutputPin, Polarity};

/// One relay channel
struct Relay<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: OutputPin> Relay<P> {
    fn drive(&mut self, level: Level) {
        self.pin.set_state(self.polarity.level_for(level.is_on()));
    }
}

/// Relay bank implementing [`OutputDriver`]
///
/// All relays are released on construction.
pub struct RelayBank<P> {
    relays: [Relay<P>; Actuator::COUNT],
    /// Logical level last written per actuator
    levels: [Level; Actuator::COUNT],
}

impl<P: OutputPin> RelayBank<P> {
    /// Create a relay bank
    ///
    /// Pins are given in [`Actuator::ALL`] order: motor power, motor
    /// direction, fill valve, drain valve.
    pub fn new(pins: [P; Actuator::COUNT], polarity: Polarity) -> Self {
        Self::with_polarities(pins, [polarity; Actuator::COUNT])
    }

    /// Create a relay bank with a polarity per relay
    pub fn with_polarities(pins: [P; Actuator::COUNT], polarities: [Polarity; Actuator::COUNT]) -> Self {
        let mut index = 0;
        let relays = pins.map(|pin| {
            let relay = Relay {
                pin,
                polarity: polarities[index],
            };
            index += 1;
            relay
        });

        let mut bank = Self {
            relays,
            levels: [Level::Off; Actuator::COUNT],
        };
        for actuator in Actuator::ALL {
            bank.set_actuator(actuator, Level::Off);
        }
        bank
    }

    /// Logical level of an actuator
    pub fn level(&self, actuator: Actuator) -> Level {
        self.levels[actuator.index()]
    }

    /// Pin driving an actuator
    pub fn pin(&self, actuator: Actuator) -> &P {
        &self.relays[actuator.index()].pin
    }
}

impl<P: OutputPin> OutputDriver for RelayBank<P> {
    fn set_actuator(&mut self, actuator: Actuator, level: Level) {
        self.relays[actuator.index()].drive(level);
        self.levels[actuator.index()] = level;
    }
}
