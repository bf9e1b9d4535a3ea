// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Die Button Tasks schicken bestätigte Drücke über einen Embassy
// Channel an den Display Task; der Status-Blink Task hängt an nichts.

pub mod buttons;
pub mod digit_display;
pub mod status_blink;

// Re-export Tasks für einfachen Import
pub use buttons::button_task;
pub use digit_display::digit_display_task;
pub use status_blink::status_blink_task;
