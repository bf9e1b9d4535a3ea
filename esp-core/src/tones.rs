//! Ton-Tabelle: Ziffer → Frequenz
//!
//! Konstante Daten ohne Hardware-Dependencies

use crate::types::Digit;

/// Frequenz-Tabelle in Hz, genau ein Eintrag pro Ziffer 0-9
///
/// C-Dur-Tonleiter ab C4: jede Ziffer bekommt einen eigenen,
/// unterscheidbaren Ton.
pub const TONE_TABLE: [u32; 10] = [262, 294, 330, 349, 392, 440, 494, 523, 587, 659];

/// Liefert die Ton-Frequenz für eine Ziffer
///
/// Kein Range-Check nötig: die [`Digit`]-Invariante garantiert 0-9.
pub const fn tone_for_digit(digit: Digit) -> u32 {
    TONE_TABLE[digit.value() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_frequency_per_digit() {
        assert_eq!(TONE_TABLE.len(), 10);
    }

    #[test]
    fn test_frequencies_distinct_and_ascending() {
        for window in TONE_TABLE.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn test_tone_for_digit_indexes_table() {
        let mut digit = Digit::ZERO;
        for expected in TONE_TABLE.iter() {
            assert_eq!(tone_for_digit(digit), *expected);
            digit = digit.next();
        }
    }
}
