//! Core Types für die Ziffern-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Anzahl Zeilen der LED-Matrix
pub const NUM_ROWS: usize = 5;

/// Anzahl Spalten der LED-Matrix
pub const NUM_COLS: usize = 5;

/// Gesamtzahl Pixel der Matrix (5x5 = 25)
pub const NUM_PIXELS: usize = NUM_ROWS * NUM_COLS;

/// Framebuffer für die Matrix: 25 Pixel in logischer Reihenfolge (row-major)
pub type FrameBuffer = [RGB8; NUM_PIXELS];

/// Angezeigte Ziffer (0-9)
///
/// Die einzige Quelle der Wahrheit dafür, was angezeigt wird und welcher
/// Ton spielt. Besitzer ist die Application State Machine ([`crate::DigitApp`]);
/// mutiert wird nur bei einem bestätigten Tastendruck.
///
/// Invariante: der Wert ist immer ein gültiger Index in
/// [`crate::DIGIT_GLYPHS`] und [`crate::TONE_TABLE`]. Durchgesetzt per
/// Modulo-Arithmetik in [`Digit::next`]/[`Digit::prev`], nie per Range-Check.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Start-Ziffer beim Einschalten
    pub const ZERO: Self = Self(0);

    /// Nächste Ziffer: `(d + 1) mod 10`
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % 10)
    }

    /// Vorherige Ziffer: `(d + 9) mod 10`
    #[must_use]
    pub const fn prev(self) -> Self {
        Self((self.0 + 9) % 10)
    }

    /// Roher Wert (0-9), z.B. als Tabellen-Index
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Button-Kanal: welcher der beiden Taster gemeint ist
///
/// 1:1 an eine physische Eingangsleitung gebunden, unveränderlich
/// für die Prozess-Lebensdauer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonChannel {
    /// Taster A: Ziffer hochzählen
    Increment,
    /// Taster B: Ziffer runterzählen
    Decrement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_starts_at_zero() {
        assert_eq!(Digit::ZERO.value(), 0);
        assert_eq!(Digit::default(), Digit::ZERO);
    }

    #[test]
    fn test_digit_next_wraps_nine_to_zero() {
        let mut d = Digit::ZERO;
        for _ in 0..9 {
            d = d.next();
        }
        assert_eq!(d.value(), 9);
        assert_eq!(d.next().value(), 0);
    }

    #[test]
    fn test_digit_prev_wraps_zero_to_nine() {
        assert_eq!(Digit::ZERO.prev().value(), 9);
    }

    #[test]
    fn test_digit_increment_cycle_law() {
        // Zehnmal hochzählen landet wieder beim Startwert
        let start = Digit::ZERO.next().next().next(); // 3
        let mut d = start;
        for _ in 0..10 {
            d = d.next();
        }
        assert_eq!(d, start);
    }

    #[test]
    fn test_digit_decrement_cycle_law() {
        let start = Digit::ZERO.next(); // 1
        let mut d = start;
        for _ in 0..10 {
            d = d.prev();
        }
        assert_eq!(d, start);
    }

    #[test]
    fn test_digit_next_prev_are_inverse() {
        let mut d = Digit::ZERO;
        for _ in 0..10 {
            assert_eq!(d.next().prev(), d);
            assert_eq!(d.prev().next(), d);
            d = d.next();
        }
    }
}
