//! Tambour - Washing Machine Cycle Controller Firmware
//!
//! Main firmware binary for RP2040-based washing machine controllers.
//! A single button selects and starts a program; the firmware sequences
//! fill, wash, drain and spin through four relays.
//!
//! Named after the French "tambour" - the drum of a washing machine.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use tambour_core::config::CycleConfig;
use tambour_drivers::{DebouncedButton, IndicatorBank, RelayBank};
use tambour_hal_rp2040::{PinBank, PinError, PinSpec, RpInput, RpOutput};

mod board;
mod tasks;

use board::{BoardPins, PICO_RELAY_BOARD};

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tambour firmware starting...");

    let p = embassy_rp::init(Default::default());
    let mut bank = PinBank::new(p);
    info!("Peripherals initialized");

    let pins = match PICO_RELAY_BOARD.resolve() {
        Ok(pins) => pins,
        Err(e) => {
            error!("Invalid board map: {}", e);
            return;
        }
    };

    let hardware = match build_hardware(&mut bank, &pins) {
        Ok(hw) => hw,
        Err(e) => {
            error!("Pin setup failed: {}", e);
            return;
        }
    };
    info!("Relays, button and indicators initialized");

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner
        .spawn(tasks::controller_task(hardware, CycleConfig::STANDARD))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Claim every board pin and wrap it in its driver
///
/// Outputs start at their inactive level.
fn build_hardware(bank: &mut PinBank, pins: &BoardPins) -> Result<tasks::Hardware, PinError> {
    let [motor, direction, fill, drain] = pins.relays;
    let relays = RelayBank::with_polarities(
        [
            output(bank, motor)?,
            output(bank, direction)?,
            output(bank, fill)?,
            output(bank, drain)?,
        ],
        pins.relays.map(|spec| spec.polarity),
    );

    let [fill_led, wash_led, drain_led] = pins.leds;
    let indicators = IndicatorBank::new(
        [
            output(bank, fill_led)?,
            output(bank, wash_led)?,
            output(bank, drain_led)?,
        ],
        fill_led.polarity,
    );

    let pull = if pins.button.pull_up { Pull::Up } else { Pull::None };
    let button_pin = RpInput::new(Input::new(bank.take(pins.button.pin)?, pull));
    let button = DebouncedButton::new(button_pin, pins.button.polarity);

    Ok(tasks::Hardware {
        relays,
        indicators,
        button,
    })
}

fn output(bank: &mut PinBank, spec: PinSpec) -> Result<RpOutput<'static>, PinError> {
    let inactive = Level::from(spec.polarity.level_for(false));
    Ok(RpOutput::new(Output::new(bank.take(spec.pin)?, inactive)))
}
