//! Strongbox - Keypad Safe Firmware
//!
//! Main firmware binary for an RP2040-based keypad safe: ten direct-wired
//! keys, a 16x2 HD44780 LCD, red/green status LEDs and a diagnostic UART.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use strongbox_core::config::{parse_config, DeviceConfig};
use strongbox_core::lock::{Digit, LockController};
use strongbox_drivers::keypad::Keypad;
use strongbox_drivers::lcd::Hd44780;
use strongbox_drivers::led::GpioLeds;
use strongbox_drivers::serial::SerialDiagnostic;

mod channels;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit strongbox.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../strongbox.toml");

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Strongbox firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    info!(
        "Lock policy: {} attempts, {}s lockout",
        config.lock.max_attempts, config.lock.lockout_s
    );

    // Diagnostic UART (GPIO0 TX, GPIO1 RX)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config.serial.baud;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 16]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, _rx) = uart.split();
    let diag = SerialDiagnostic::new(tx, config.serial.nul_terminate);

    info!("UART initialized at {} baud", config.serial.baud);

    // LCD: RS=GPIO6, EN=GPIO7, D4-D7=GPIO8-11
    let mut lcd = Hd44780::new(
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        [
            Output::new(p.PIN_8, Level::Low),
            Output::new(p.PIN_9, Level::Low),
            Output::new(p.PIN_10, Level::Low),
            Output::new(p.PIN_11, Level::Low),
        ],
        Delay,
    );
    lcd.init();

    info!("LCD initialized");

    // Status LEDs: red=GPIO14, green=GPIO15
    let leds = GpioLeds::new_active_high(
        Output::new(p.PIN_14, Level::Low),
        Output::new(p.PIN_15, Level::Low),
    );

    // Keys 0-9 pull to ground: GPIO16-22, GPIO26-28
    let keypad = Keypad::new(
        [
            Input::new(p.PIN_16, Pull::Up),
            Input::new(p.PIN_17, Pull::Up),
            Input::new(p.PIN_18, Pull::Up),
            Input::new(p.PIN_19, Pull::Up),
            Input::new(p.PIN_20, Pull::Up),
            Input::new(p.PIN_21, Pull::Up),
            Input::new(p.PIN_22, Pull::Up),
            Input::new(p.PIN_26, Pull::Up),
            Input::new(p.PIN_27, Pull::Up),
            Input::new(p.PIN_28, Pull::Up),
        ],
        Digit::ALL,
        false,
    );

    info!("Keypad initialized");

    let lock = LockController::new(config.lock, lcd, leds, diag);

    // Spawn tasks
    spawner.spawn(tasks::lock_task(lock)).unwrap();
    spawner.spawn(tasks::keypad_task(keypad)).unwrap();
    spawner.spawn(tasks::tick_task()).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task only holds the unused UART receive half
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Parse the embedded configuration
///
/// build.rs validates strongbox.toml, so the fallback only triggers when
/// the two validators disagree.
fn load_config() -> DeviceConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {}", e);
            warn!("Using default configuration");
            DeviceConfig::default()
        }
    }
}
