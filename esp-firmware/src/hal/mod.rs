// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Collaborator-Traits aus esp-core
// für die echte ESP32-C6 Hardware. Die Mock-Implementierungen für
// Host-Tests leben in esp-tests.

pub mod buzzer;
pub mod matrix;

pub use buzzer::LedcToneDriver;
pub use matrix::RmtMatrixWriter;
