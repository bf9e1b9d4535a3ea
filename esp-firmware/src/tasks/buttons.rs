// Button Task - Flanken-Erkennung und Entprellung pro Taster
use defmt::{debug, info};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Input;

use crate::config::DEBOUNCE_WINDOW_MS;
use crate::{ButtonChannel, ConfirmOutcome, Debouncer, EdgeAction, PressEventSender};

/// Button Task - ein Task pro Kanal (Task-Pool mit 2 Instanzen)
///
/// Pipeline pro Durchlauf: fallende Flanke abwarten → Entprell-Fenster
/// schlafen → Leitung neu abtasten → bestätigten Druck in den Channel
/// schicken. Während der Task im Fenster schläft, lauscht er nicht auf
/// Flanken - das asynchrone Gegenstück zum Maskieren des
/// Leitungs-Interrupts im klassischen ISR-Modell. Der Automat aus
/// esp-core hält die Invariante fest: höchstens eine ausstehende
/// Bestätigung pro Kanal.
///
/// # Parameter
/// - `pin`: entprellter Eingang (aktiv-low, Pull-Up)
/// - `channel`: welcher logische Taster an diesem Pin hängt
/// - `sender`: Channel Sender für bestätigte Drücke
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(
    mut pin: Input<'static>,
    channel: ButtonChannel,
    sender: PressEventSender,
) {
    let mut debouncer = Debouncer::new();
    info!("Button task started: {}", channel);

    loop {
        pin.wait_for_falling_edge().await;

        match debouncer.on_falling_edge() {
            EdgeAction::ArmConfirmation => {}
            // Kann in dieser Task-Struktur nicht auftreten (der Task
            // wartet sequenziell), der Automat deckt es trotzdem ab
            EdgeAction::Ignore => continue,
        }

        // Entprell-Fenster: Leitung muss 50 ms Ruhe geben
        Timer::after(Duration::from_millis(DEBOUNCE_WINDOW_MS)).await;

        // Neuabtastung: aktiv-low, Pegel 0 heißt weiterhin gedrückt
        match debouncer.on_confirmation(pin.is_low()) {
            ConfirmOutcome::Confirmed => {
                info!("Confirmed press: {}", channel);
                sender.send(channel).await;
            }
            ConfirmOutcome::Rejected => {
                // Kurzer Preller oder zu kurzer Druck: still verwerfen
                debug!("Debounce rejected: {}", channel);
            }
        }
    }
}
