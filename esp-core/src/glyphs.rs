//! Ziffern-Glyphen für die 5x5 LED-Matrix
//!
//! Pure Daten + Rendering-Logik ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::{Digit, FrameBuffer, NUM_COLS, NUM_PIXELS, NUM_ROWS};

/// Pixel "an": weiß, volle Helligkeit (0xFFFFFF)
pub const PIXEL_ON: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};

/// Pixel "aus": schwarz (0x000000)
pub const PIXEL_OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Glyphen-Tabelle: eine vollständige 5x5 Bitmap pro Ziffer 0-9
///
/// Jede Zeile ist eine 5-Bit-Maske, Bit 4 = linke Spalte.
/// Invariante: genau eine Glyphe pro Ziffer, jede mit allen 25 Zellen.
pub const DIGIT_GLYPHS: [[u8; NUM_ROWS]; 10] = [
    // 0
    [0b11111, 0b10001, 0b10001, 0b10001, 0b11111],
    // 1
    [0b00100, 0b00100, 0b00100, 0b01100, 0b00100],
    // 2
    [0b11111, 0b10000, 0b11111, 0b00001, 0b11111],
    // 3
    [0b11111, 0b00001, 0b01111, 0b00001, 0b11111],
    // 4
    [0b10000, 0b00001, 0b11111, 0b10001, 0b10001],
    // 5
    [0b11111, 0b00001, 0b11111, 0b10000, 0b11111],
    // 6
    [0b11111, 0b10001, 0b11111, 0b10000, 0b11111],
    // 7
    [0b00001, 0b01000, 0b00100, 0b00010, 0b11111],
    // 8
    [0b11111, 0b10001, 0b11111, 0b10001, 0b11111],
    // 9
    [0b11111, 0b00001, 0b11111, 0b10001, 0b11111],
];

/// Liefert die Glyphe für eine Ziffer (fünf Zeilen-Masken, Copy)
///
/// Kein Range-Check nötig: die [`Digit`]-Invariante garantiert 0-9.
pub const fn glyph_for_digit(digit: Digit) -> [u8; NUM_ROWS] {
    DIGIT_GLYPHS[digit.value() as usize]
}

/// Prüft ob eine Zelle der Glyphe gesetzt ist
pub const fn pixel_set(glyph: &[u8; NUM_ROWS], row: usize, col: usize) -> bool {
    (glyph[row] & (1 << (NUM_COLS - 1 - col))) != 0
}

/// Rendert eine Ziffer als Framebuffer: 25 Pixel, row-major
///
/// Überschreibt bei jedem Aufruf alle 25 Pixel, keine Partial-Updates.
/// Emittiert logische Pixel-Reihenfolge; physische Adressierung
/// (z.B. Zickzack-Verdrahtung) ist Sache des Display-Collaborators.
pub fn frame_for_digit(digit: Digit) -> FrameBuffer {
    let glyph = glyph_for_digit(digit);
    let mut frame: FrameBuffer = [PIXEL_OFF; NUM_PIXELS];

    for row in 0..NUM_ROWS {
        for col in 0..NUM_COLS {
            if pixel_set(&glyph, row, col) {
                frame[row * NUM_COLS + col] = PIXEL_ON;
            }
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_glyphs_distinct() {
        // Keine zwei Ziffern teilen sich eine identische Glyphe
        for a in 0..10 {
            for b in (a + 1)..10 {
                assert_ne!(
                    DIGIT_GLYPHS[a], DIGIT_GLYPHS[b],
                    "glyphs {} and {} are identical",
                    a, b
                );
            }
        }
    }

    #[test]
    fn test_glyph_rows_use_only_five_bits() {
        for glyph in DIGIT_GLYPHS.iter() {
            for row in glyph.iter() {
                assert_eq!(row & !0b11111, 0);
            }
        }
    }

    #[test]
    fn test_frame_matches_glyph_row_major() {
        let mut digit = Digit::ZERO;
        for _ in 0..10 {
            let glyph = glyph_for_digit(digit);
            let frame = frame_for_digit(digit);

            for row in 0..NUM_ROWS {
                for col in 0..NUM_COLS {
                    let expected = if pixel_set(&glyph, row, col) {
                        PIXEL_ON
                    } else {
                        PIXEL_OFF
                    };
                    assert_eq!(frame[row * NUM_COLS + col], expected);
                }
            }
            digit = digit.next();
        }
    }

    #[test]
    fn test_frame_for_zero_is_hollow_rectangle() {
        let frame = frame_for_digit(Digit::ZERO);
        // Oberste und unterste Zeile komplett an
        for col in 0..NUM_COLS {
            assert_eq!(frame[col], PIXEL_ON);
            assert_eq!(frame[4 * NUM_COLS + col], PIXEL_ON);
        }
        // Mittlere Zeilen: nur Ränder an
        for row in 1..4 {
            assert_eq!(frame[row * NUM_COLS], PIXEL_ON);
            assert_eq!(frame[row * NUM_COLS + 4], PIXEL_ON);
            for col in 1..4 {
                assert_eq!(frame[row * NUM_COLS + col], PIXEL_OFF);
            }
        }
    }
}
