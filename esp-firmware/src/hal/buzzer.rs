// Buzzer - ToneDriver-Implementierung über das LEDC PWM Peripheral
//
// Der Core fordert nur {Frequenz, 50% Duty} an; Vorteiler und
// Register-Konfiguration sind komplett hier gekapselt.

use esp_core::{ToneDriver, ToneError};

use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;

/// Frequenz für den Stumm-Zustand
/// Bei 0% Duty ist die Frequenz egal, der Timer braucht aber einen
/// gültigen Wert innerhalb der Teiler-Auflösung
const IDLE_FREQUENCY_HZ: u32 = 440;

/// Real Hardware Tone Driver
///
/// Erzeugt ein Rechteck-Signal über LEDC: `start` konfiguriert den
/// Low-Speed-Timer auf die gewünschte Frequenz und den Kanal auf
/// 50% Duty, `stop` setzt den Duty auf 0% ohne die Peripherie
/// abzuschalten. Beides idempotent.
pub struct LedcToneDriver<'a> {
    ledc: Ledc<'a>,
    pin: esp_hal::peripherals::GPIO21<'a>,
    frequency_hz: u32,
}

impl<'a> LedcToneDriver<'a> {
    /// Erstellt einen neuen LedcToneDriver
    ///
    /// # Parameter
    /// - `ledc_peripheral`: LEDC Peripheral
    /// - `gpio21`: GPIO21 Peripheral für den Buzzer-Ausgang
    pub fn new(
        ledc_peripheral: esp_hal::peripherals::LEDC<'a>,
        gpio21: esp_hal::peripherals::GPIO21<'a>,
    ) -> Self {
        let mut ledc = Ledc::new(ledc_peripheral);
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

        Self {
            ledc,
            pin: gpio21,
            frequency_hz: IDLE_FREQUENCY_HZ,
        }
    }

    /// Konfiguriert Timer und Kanal neu
    ///
    /// Timer und Kanal sind nur Register-Handles: nach dem Configure
    /// läuft die PWM weiter, auch wenn die Handles am Funktionsende
    /// fallen gelassen werden.
    fn configure(&mut self, frequency_hz: u32, duty_pct: u8) -> Result<(), ToneError> {
        let mut lstimer = self.ledc.timer::<LowSpeed>(timer::Number::Timer0);
        lstimer
            .configure(timer::config::Config {
                duty: timer::config::Duty::Duty10Bit,
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_hz(frequency_hz),
            })
            .map_err(|_| ToneError::ConfigFailed)?;

        let mut pwm_channel = self
            .ledc
            .channel(channel::Number::Channel0, self.pin.reborrow());
        pwm_channel
            .configure(channel::config::Config {
                timer: &lstimer,
                duty_pct,
                pin_config: channel::config::PinConfig::PushPull,
            })
            .map_err(|_| ToneError::ConfigFailed)?;

        Ok(())
    }
}

impl<'a> ToneDriver for LedcToneDriver<'a> {
    fn start(&mut self, frequency_hz: u32) -> Result<(), ToneError> {
        self.frequency_hz = frequency_hz;
        // 50% Duty: symmetrisches Rechteck
        self.configure(frequency_hz, 50)
    }

    fn stop(&mut self) -> Result<(), ToneError> {
        // 0% Duty: Pegel dauerhaft low, Timer läuft weiter
        self.configure(self.frequency_hz, 0)
    }
}
