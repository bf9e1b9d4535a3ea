// Digit Display Task - Besitzer der Ziffer, steuert Matrix und Ton
use defmt::{error, info};
use embassy_time::{Duration, with_timeout};
use esp_hal_smartled::smart_led_buffer;

use crate::{DigitApp, MatrixDisplay, PressEventReceiver, ToneDriver};
use crate::config::{RMT_CLOCK_MHZ, TONE_DURATION_MS};
use crate::hal::{LedcToneDriver, RmtMatrixWriter};

/// Digit Display Logic - Pipeline ohne Hardware-Abhängigkeit
///
/// Wartet auf bestätigte Tastendrücke aus dem Channel und wendet sie
/// über die DigitApp an (Ziffer fortschalten, Ton starten, Frame
/// rendern). Solange ein Ton spielt, wird mit 200-ms-Timeout gewartet:
/// läuft er ab, wird der Ton stumm geschaltet.
///
/// Ein neuer Druck vor Ablauf startet das Stumm-Fenster neu. Das
/// ersetzt das alte Muster "neuen One-Shot-Timer bewaffnen ohne den
/// vorherigen zu canceln": ein veralteter Stumm-Timer kann hier keinen
/// neueren Ton mehr abschneiden, und kein Kontext blockiert jemals
/// (kein Busy-Wait in Handler-Kontexten).
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (RmtMatrixWriter, LedcToneDriver) im Production-Code
/// - Mock Implementations für die Pipeline-Tests in esp-tests
pub async fn digit_display_logic<D: MatrixDisplay, T: ToneDriver>(
    display: D,
    tone: T,
    receiver: PressEventReceiver,
) {
    let mut app = DigitApp::new(display, tone);

    // Einschalt-Zustand: Ziffer 0 anzeigen, noch kein Ton
    if app.show_initial().is_err() {
        error!("Failed to render initial digit");
    }

    let mut tone_active = false;

    loop {
        let event = if tone_active {
            // Ton spielt: nächster Druck ODER Ablauf des Stumm-Fensters
            match with_timeout(Duration::from_millis(TONE_DURATION_MS), receiver.receive()).await {
                Ok(channel) => Some(channel),
                Err(_) => None,
            }
        } else {
            // Kein Ton: einfach auf den nächsten Druck warten
            Some(receiver.receive().await)
        };

        match event {
            Some(channel) => match app.on_confirmed_press(channel) {
                Ok(digit) => {
                    tone_active = true;
                    info!("Press applied: {} -> digit {}", channel, digit);
                }
                Err(e) => {
                    // Der Ton startet vor dem Rendering: bei einem
                    // Render-Fehler klingt er bereits. Stumm-Fenster
                    // trotzdem bewaffnen, sonst klingt er endlos weiter.
                    tone_active = true;
                    error!("Failed to apply press: {}", e);
                }
            },
            None => {
                // Stumm-Fenster abgelaufen: Ton aus (idempotent)
                if app.silence().is_err() {
                    error!("Failed to silence tone");
                }
                tone_active = false;
            }
        }
    }
}

/// Digit Display Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Initialisierung (RMT-Matrix, LEDC-Buzzer)
/// und ruft dann die testbare `digit_display_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio7`: GPIO7 Peripheral für die Matrix-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises WS2812-Timing
/// - `ledc_peripheral`: LEDC Peripheral für das PWM-Rechteck
/// - `gpio21`: GPIO21 Peripheral für den Buzzer-Ausgang
/// - `receiver`: Channel Receiver für bestätigte Tastendrücke
#[embassy_executor::task]
pub async fn digit_display_task(
    gpio7: esp_hal::peripherals::GPIO7<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    ledc_peripheral: esp_hal::peripherals::LEDC<'static>,
    gpio21: esp_hal::peripherals::GPIO21<'static>,
    receiver: PressEventReceiver,
) {
    // Buffer für SmartLED-Daten erstellen (25 LEDs)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(25);

    // Hardware initialisieren: Writer kapselt RMT + SmartLED
    let display = RmtMatrixWriter::new(gpio7, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);
    let tone = LedcToneDriver::new(ledc_peripheral, gpio21);

    // Business Logic aufrufen (testbar!)
    digit_display_logic(display, tone, receiver).await;
}
