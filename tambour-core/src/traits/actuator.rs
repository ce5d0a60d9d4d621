//! Actuator output trait
//!
//! The four relay/triac outputs of the machine, addressed by role rather
//! than by pin. Wiring polarity (active-high or active-low relay boards) is
//! the driver's concern; the cycle logic only speaks in [`Level`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relay-driven outputs of the washing machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Actuator {
    /// Drum motor power
    MotorPower,
    /// Drum motor direction (reversing relay)
    MotorDirection,
    /// Water inlet valve
    FillValve,
    /// Drain pump / valve
    DrainValve,
}

impl Actuator {
    /// Number of actuators
    pub const COUNT: usize = 4;

    /// All actuators, in output bank order
    pub const ALL: [Actuator; Self::COUNT] = [
        Actuator::MotorPower,
        Actuator::MotorDirection,
        Actuator::FillValve,
        Actuator::DrainValve,
    ];

    /// Position of this actuator in the output bank
    pub const fn index(self) -> usize {
        match self {
            Actuator::MotorPower => 0,
            Actuator::MotorDirection => 1,
            Actuator::FillValve => 2,
            Actuator::DrainValve => 3,
        }
    }
}

/// Logical output level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Level {
    /// Relay energized
    On,
    /// Relay released
    #[default]
    Off,
}

impl Level {
    /// Check if this level energizes the relay
    pub fn is_on(self) -> bool {
        self == Level::On
    }
}

impl From<bool> for Level {
    fn from(on: bool) -> Self {
        if on {
            Level::On
        } else {
            Level::Off
        }
    }
}

/// Drum rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Clockwise rotation
    #[default]
    Clockwise,
    /// Counter-clockwise rotation
    CounterClockwise,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Level of the direction relay for this direction
    ///
    /// Clockwise is the released position of the reversing relay, so an
    /// all-off output bank always leaves the motor wired clockwise.
    pub fn level(self) -> Level {
        match self {
            Direction::Clockwise => Level::Off,
            Direction::CounterClockwise => Level::On,
        }
    }
}

/// Trait for the actuator output bank
///
/// Writes are assumed to always succeed. Implementations must accept the
/// same write repeatedly; the cycle logic re-asserts steady-state levels on
/// every tick.
pub trait OutputDriver {
    /// Drive one actuator to the given level
    fn set_actuator(&mut self, actuator: Actuator, level: Level);

    /// Set the drum direction relay
    fn set_direction(&mut self, direction: Direction) {
        self.set_actuator(Actuator::MotorDirection, direction.level());
    }

    /// Force every actuator to its safe position
    ///
    /// Motor power is cut first, then the direction relay is released,
    /// then both valves are closed.
    fn all_off(&mut self) {
        self.set_actuator(Actuator::MotorPower, Level::Off);
        self.set_direction(Direction::Clockwise);
        self.set_actuator(Actuator::FillValve, Level::Off);
        self.set_actuator(Actuator::DrainValve, Level::Off);
    }
}
