//! Application State Machine
//!
//! Einziger Besitzer der aktuellen Ziffer. Wendet pro bestätigtem
//! Tastendruck genau einen Übergang an und stößt danach die beiden
//! Output-Collaborators an (Ton, Matrix).

use crate::glyphs::frame_for_digit;
use crate::tones::tone_for_digit;
use crate::traits::{DisplayError, MatrixDisplay, ToneDriver, ToneError};
use crate::types::{ButtonChannel, Digit};

/// Fehler aus der Ziffern-Pipeline: bündelt die Collaborator-Fehler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppError {
    Display(DisplayError),
    Tone(ToneError),
}

impl From<DisplayError> for AppError {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

impl From<ToneError> for AppError {
    fn from(e: ToneError) -> Self {
        Self::Tone(e)
    }
}

/// Ziffern-Applikation: aktuelle Ziffer + die beiden Output-Collaborators
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (RmtMatrixWriter, LedcToneDriver) im Production-Code
/// - Mock Implementations in Unit Tests
pub struct DigitApp<D: MatrixDisplay, T: ToneDriver> {
    digit: Digit,
    display: D,
    tone: T,
}

impl<D: MatrixDisplay, T: ToneDriver> DigitApp<D, T> {
    /// Startet bei Ziffer 0
    pub fn new(display: D, tone: T) -> Self {
        Self {
            digit: Digit::ZERO,
            display,
            tone,
        }
    }

    /// Aktuell angezeigte Ziffer
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// Lesezugriff auf den Display-Collaborator (für Assertions in Tests)
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Lesezugriff auf den Ton-Collaborator (für Assertions in Tests)
    pub fn tone(&self) -> &T {
        &self.tone
    }

    /// Rendert die Start-Ziffer beim Einschalten, ohne Ton
    pub fn show_initial(&mut self) -> Result<(), AppError> {
        self.display.render(&frame_for_digit(self.digit))?;
        Ok(())
    }

    /// Bestätigter Tastendruck: genau ein Übergang
    ///
    /// Reihenfolge laut Kontrakt: Ziffer fortschalten (Modulo-Arithmetik),
    /// Ton mit der Frequenz der neuen Ziffer starten, kompletten Frame
    /// rendern. Der Aufrufer bewaffnet anschließend den Stumm-Timer.
    /// Kein anderer Code-Pfad mutiert die Ziffer.
    pub fn on_confirmed_press(&mut self, channel: ButtonChannel) -> Result<Digit, AppError> {
        self.digit = match channel {
            ButtonChannel::Increment => self.digit.next(),
            ButtonChannel::Decrement => self.digit.prev(),
        };

        self.tone.start(tone_for_digit(self.digit))?;
        self.display.render(&frame_for_digit(self.digit))?;

        Ok(self.digit)
    }

    /// Schaltet den Ton stumm (idempotent)
    pub fn silence(&mut self) -> Result<(), AppError> {
        self.tone.stop()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FrameBuffer;

    // Minimale Mocks für die no_std Unit Tests.
    // Die vollwertigen Mocks (mit Aufzeichnung aller Frames) leben in esp-tests.

    #[derive(Default)]
    struct CountingDisplay {
        render_count: usize,
        last_frame: Option<FrameBuffer>,
    }

    impl MatrixDisplay for CountingDisplay {
        fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
            self.render_count += 1;
            self.last_frame = Some(*frame);
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingTone {
        start_count: usize,
        stop_count: usize,
        last_frequency: Option<u32>,
    }

    impl ToneDriver for CountingTone {
        fn start(&mut self, frequency_hz: u32) -> Result<(), ToneError> {
            self.start_count += 1;
            self.last_frequency = Some(frequency_hz);
            Ok(())
        }

        fn stop(&mut self) -> Result<(), ToneError> {
            self.stop_count += 1;
            Ok(())
        }
    }

    #[test]
    fn test_starts_at_zero_without_tone() {
        let mut app = DigitApp::new(CountingDisplay::default(), CountingTone::default());
        app.show_initial().unwrap();

        assert_eq!(app.digit(), Digit::ZERO);
        assert_eq!(app.display.render_count, 1);
        assert_eq!(app.display.last_frame, Some(frame_for_digit(Digit::ZERO)));
        assert_eq!(app.tone.start_count, 0);
    }

    #[test]
    fn test_press_steps_digit_and_drives_outputs() {
        let mut app = DigitApp::new(CountingDisplay::default(), CountingTone::default());

        let digit = app.on_confirmed_press(ButtonChannel::Increment).unwrap();

        assert_eq!(digit, Digit::ZERO.next());
        assert_eq!(app.display.render_count, 1);
        assert_eq!(app.tone.start_count, 1);
        assert_eq!(app.tone.last_frequency, Some(tone_for_digit(digit)));
    }

    #[test]
    fn test_decrement_from_zero_wraps_to_nine() {
        let mut app = DigitApp::new(CountingDisplay::default(), CountingTone::default());

        let digit = app.on_confirmed_press(ButtonChannel::Decrement).unwrap();

        assert_eq!(digit.value(), 9);
        assert_eq!(app.tone.last_frequency, Some(crate::TONE_TABLE[9]));
    }

    #[test]
    fn test_silence_stops_tone() {
        let mut app = DigitApp::new(CountingDisplay::default(), CountingTone::default());

        app.on_confirmed_press(ButtonChannel::Increment).unwrap();
        app.silence().unwrap();
        // stop() ist idempotent, doppeltes Stummschalten ist harmlos
        app.silence().unwrap();

        assert_eq!(app.tone.stop_count, 2);
    }
}
