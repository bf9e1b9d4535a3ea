// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core (die Tasks und main importieren über crate::)
pub use esp_core::{
    ButtonChannel, ConfirmOutcome, Debouncer, DigitApp, EdgeAction, MatrixDisplay, StatusBlinker,
    ToneDriver,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

// Konfigurationswerte
use crate::config::PRESS_QUEUE_DEPTH;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Sender<'static, NoopRawMutex, ButtonChannel, 4>
// Nutze:  PressEventSender

/// Channel für bestätigte Tastendrücke (Button Tasks → Display Task)
///
/// Der einzige Trichter in den Besitzer der Ziffer: beide Kanäle senden
/// hier hinein, der Display Task konsumiert strikt sequenziell.
pub type PressEventChannel = Channel<NoopRawMutex, ButtonChannel, PRESS_QUEUE_DEPTH>;

/// Sender für bestätigte Tastendrücke
/// Erzeugt aus PressEventChannel, einer pro Button Task
pub type PressEventSender = Sender<'static, NoopRawMutex, ButtonChannel, PRESS_QUEUE_DEPTH>;

/// Receiver für bestätigte Tastendrücke (Display Task empfängt)
pub type PressEventReceiver = Receiver<'static, NoopRawMutex, ButtonChannel, PRESS_QUEUE_DEPTH>;
