// Matrix Writer - MatrixDisplay-Implementierung für die WS2812-Matrix
//
// Einzige Grenze zwischen Renderer und Display-Hardware: die
// Farb-Codierung kommt fertig aus esp-core, hier passiert nur noch
// Protokoll und Timing.

use esp_core::{DisplayError, FrameBuffer, MatrixDisplay, NUM_PIXELS};

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use smart_leds_trait::SmartLedsWrite;

/// Buffer-Größe für 25 LEDs (je 3 Farben * 8 Bits, + 1 Reset)
pub const MATRIX_BUFFER_SIZE: usize = NUM_PIXELS * 24 + 1;

/// Real Hardware Matrix Writer
///
/// Nutzt das ESP32 RMT Peripheral um die WS2812-Matrix anzusteuern.
/// Der Adapter übernimmt das serielle Pixel-Protokoll samt
/// Leitungs-Timing; der Core liefert nur die logische
/// Pixel-Reihenfolge (row-major).
///
/// Hinweis: Der Buffer muss den Task überleben, daher wird er im Task
/// erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtMatrixWriter<'a> {
    matrix: SmartLedsAdapter<'a, MATRIX_BUFFER_SIZE>,
}

impl<'a> RmtMatrixWriter<'a> {
    /// Erstellt einen neuen RmtMatrixWriter
    ///
    /// # Parameter
    /// - `gpio7`: GPIO7 Peripheral für die Matrix-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(25) Macro)
    pub fn new(
        gpio7: esp_hal::peripherals::GPIO7<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; MATRIX_BUFFER_SIZE],
    ) -> Self {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> =
            Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)).unwrap();

        // SmartLED Adapter erstellen
        let matrix = SmartLedsAdapter::new(rmt.channel0, gpio7, buffer);

        Self { matrix }
    }
}

impl<'a> MatrixDisplay for RmtMatrixWriter<'a> {
    fn render(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        self.matrix
            .write(frame.iter().copied())
            .map_err(|_| DisplayError::WriteFailed)
    }
}
