// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// GPIO-Pin für Taster A (Ziffer hochzählen)
/// Aktiv-low: Taster zieht die Leitung gegen GND, interner Pull-Up
pub const BUTTON_INCREMENT_GPIO: u8 = 5;

/// GPIO-Pin für Taster B (Ziffer runterzählen)
/// Aktiv-low, interner Pull-Up wie Taster A
pub const BUTTON_DECREMENT_GPIO: u8 = 6;

/// Entprell-Fenster in Millisekunden
/// Die Leitung muss so lange stabil sein, bevor ein Druck als echt gilt
pub const DEBOUNCE_WINDOW_MS: u64 = 50;

// ============================================================================
// LED-Matrix Konfiguration
// ============================================================================

/// GPIO-Pin für die Datenleitung der WS2812-Matrix
pub const MATRIX_GPIO_PIN: u8 = 7;

/// Anzahl der LEDs in der Matrix (5x5)
pub const MATRIX_LED_COUNT: usize = 25;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Ton Konfiguration
// ============================================================================

/// GPIO-Pin für den Buzzer (LEDC PWM Ausgang)
pub const BUZZER_GPIO_PIN: u8 = 21;

/// Ton-Dauer in Millisekunden
/// So lange klingt ein Ton nach dem letzten bestätigten Tastendruck
pub const TONE_DURATION_MS: u64 = 200;

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Status-LED (einfacher Digital-Ausgang)
pub const STATUS_LED_GPIO: u8 = 13;

/// Blink-Periode in Millisekunden
/// Die Status-LED kippt ihren Pegel einmal pro Periode, für immer
pub const BLINK_PERIOD_MS: u64 = 100;

// ============================================================================
// Channel Konfiguration
// ============================================================================

/// Kapazität des Press-Event-Channels (Button Tasks → Display Task)
/// Mehr als genug: pro Kanal ist höchstens eine Bestätigung ausstehend
pub const PRESS_QUEUE_DEPTH: usize = 4;
