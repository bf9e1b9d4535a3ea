//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstelle zu den beiden
//! Output-Collaborators ("Ziffer rendern", "Ton treiben")
//! ohne konkrete Implementierung.

use crate::types::FrameBuffer;

/// Fehler-Typ für Display-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    WriteFailed,
}

/// Fehler-Typ für Ton-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneError {
    ConfigFailed,
}

/// Trait für die 5x5 LED-Matrix
///
/// Nimmt einen kompletten Framebuffer in logischer Reihenfolge entgegen.
/// Physische Adressierung (Zickzack-Verdrahtung) und das serielle
/// Pixel-Protokoll inklusive Timing sind Sache der Implementierung.
/// Die Farb-Codierung ist genau einmal definiert - hier an dieser Grenze.
///
/// # Implementierungen
/// - **Production:** RmtMatrixWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockMatrixDisplay (in-memory Mock)
pub trait MatrixDisplay: Send {
    /// Schreibt alle 25 Pixel auf die Matrix
    ///
    /// # Fehlerbehandlung
    /// Gibt `DisplayError::WriteFailed` zurück wenn der Hardware-Zugriff
    /// fehlschlägt
    fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError>;
}

/// Trait für den Ton-Ausgang (Rechteck-Signal, 50% Duty Cycle)
///
/// # Implementierungen
/// - **Production:** LedcToneDriver (ESP32 LEDC PWM Peripheral)
/// - **Testing:** MockToneDriver (in-memory Mock)
pub trait ToneDriver: Send {
    /// Startet ein 50%-Duty-Rechteck mit der gewünschten Frequenz
    ///
    /// Idempotent: ein Aufruf während bereits ein Ton spielt
    /// konfiguriert nur die Frequenz um.
    fn start(&mut self, frequency_hz: u32) -> Result<(), ToneError>;

    /// Setzt den Ausgangspegel auf Null, ohne die Peripherie abzuschalten
    ///
    /// Idempotent: ein Aufruf ohne spielenden Ton ist ein No-Op.
    fn stop(&mut self) -> Result<(), ToneError>;
}
