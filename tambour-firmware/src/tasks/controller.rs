//! Main controller task
//!
//! Runs the wash cycle: on every tick it samples the button, advances the
//! controller, renders the indicators and logs what changed.

use defmt::*;

use tambour_core::config::CycleConfig;
use tambour_core::wash::OscillationEvent;
use tambour_core::{Controller, TickReport};
use tambour_drivers::{DebouncedButton, IndicatorBank, RelayBank};
use tambour_hal_rp2040::{RpInput, RpOutput};

use crate::tasks::tick::TICK_SIGNAL;

/// Drivers owned by the controller task
pub struct Hardware {
    pub relays: RelayBank<RpOutput<'static>>,
    pub indicators: IndicatorBank<RpOutput<'static>>,
    pub button: DebouncedButton<RpInput<'static>>,
}

/// Controller task - main cycle loop
#[embassy_executor::task]
pub async fn controller_task(mut hw: Hardware, config: CycleConfig) {
    info!("Controller task started");

    let mut controller = Controller::new(config);
    let now = TICK_SIGNAL.wait().await;
    controller.start(now, &mut hw.relays, &mut hw.indicators);
    info!("Active state: {}", controller.state().name());

    loop {
        let now = TICK_SIGNAL.wait().await;

        hw.button.poll(now);
        let report = controller.tick(now, &mut hw.button, &mut hw.relays, &mut hw.indicators);
        hw.indicators.update(now);

        log_report(&report);
    }
}

fn log_report(report: &TickReport) {
    if let Some(change) = report.state_change {
        info!("Active state: {}", change.to.name());
        debug!("Transition {} -> {}", change.from.name(), change.to.name());
    }

    match report.oscillation {
        Some(OscillationEvent::MotorOn(direction)) => {
            info!("Motor on, direction {}", direction);
        }
        Some(OscillationEvent::MotorOff { next }) => {
            info!("Motor off, reversing to {}", next);
        }
        None => {}
    }
}
