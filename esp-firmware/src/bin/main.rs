// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_ziffernanzeige::tasks::{button_task, digit_display_task, status_blink_task};
use esp_ziffernanzeige::{ButtonChannel, PressEventChannel};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet die Embassy Runtime und spawnt die
/// Tasks. Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Taster: aktiv-low mit internem Pull-Up, fallende Flanke = Druck
    let button_increment = Input::new(
        peripherals.GPIO5,
        InputConfig::default().with_pull(Pull::Up),
    );
    let button_decrement = Input::new(
        peripherals.GPIO6,
        InputConfig::default().with_pull(Pull::Up),
    );

    // Press-Event-Channel erstellen (Button Tasks → Display Task)
    // Der einzige Weg, auf dem die Ziffer mutiert wird
    static PRESS_CHANNEL: static_cell::StaticCell<PressEventChannel> =
        static_cell::StaticCell::new();
    let press_channel = PRESS_CHANNEL.init(PressEventChannel::new());

    // Spawn Display Task (Matrix + Ton, alleiniger Besitzer der Ziffer)
    spawner
        .spawn(digit_display_task(
            peripherals.GPIO7,
            peripherals.RMT,
            peripherals.LEDC,
            peripherals.GPIO21,
            press_channel.receiver(),
        ))
        .unwrap();

    // Spawn Button Tasks (Task-Pool: eine Instanz pro Kanal)
    spawner
        .spawn(button_task(
            button_increment,
            ButtonChannel::Increment,
            press_channel.sender(),
        ))
        .unwrap();
    spawner
        .spawn(button_task(
            button_decrement,
            ButtonChannel::Decrement,
            press_channel.sender(),
        ))
        .unwrap();

    // Spawn Status Blink Task (unabhängig von allem anderen)
    spawner.spawn(status_blink_task(peripherals.GPIO13)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
