// Status Blink Task - Status-LED im festen 100-ms-Raster
use defmt::info;
use embassy_time::{Duration, Ticker};
use esp_hal::gpio::{Level, Output, OutputConfig};

use crate::StatusBlinker;
use crate::config::BLINK_PERIOD_MS;

/// Status Blink Task - läuft einmal gestartet für immer
///
/// Kippt die Status-LED einmal pro Periode, vollständig unabhängig von
/// Tastern, Ziffer und Ton. Ticker statt Timer, damit die Perioden
/// nicht driften.
#[embassy_executor::task]
pub async fn status_blink_task(gpio13: esp_hal::peripherals::GPIO13<'static>) {
    // Start-Zustand: aus
    let mut led = Output::new(gpio13, Level::Low, OutputConfig::default());
    let mut blinker = StatusBlinker::new();
    let mut ticker = Ticker::every(Duration::from_millis(BLINK_PERIOD_MS));

    info!("Status blink task started");

    loop {
        ticker.next().await;

        let on = blinker.toggle();
        led.set_level(if on { Level::High } else { Level::Low });
    }
}
