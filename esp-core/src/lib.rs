//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits, Typen und Pure Logic für die
//! Ziffern-Steuerung (Taster → Entprellung → Ziffer → Matrix + Ton).

#![no_std]

pub mod app;
pub mod blink;
pub mod debounce;
pub mod glyphs;
pub mod tones;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use app::{AppError, DigitApp};
pub use blink::StatusBlinker;
pub use debounce::{ConfirmOutcome, Debouncer, EdgeAction};
pub use glyphs::{DIGIT_GLYPHS, PIXEL_OFF, PIXEL_ON, frame_for_digit};
pub use tones::{TONE_TABLE, tone_for_digit};
pub use traits::{DisplayError, MatrixDisplay, ToneDriver, ToneError};
pub use types::{ButtonChannel, Digit, FrameBuffer, NUM_COLS, NUM_PIXELS, NUM_ROWS};
