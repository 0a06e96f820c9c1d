//! Lock controller task
//!
//! Owns the lock controller and its peripherals, and applies every queued
//! input in arrival order.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::uart::BufferedUartTx;
use embassy_time::Delay;

use strongbox_core::input::Input;
use strongbox_core::lock::LockController;
use strongbox_core::state::Event;
use strongbox_drivers::lcd::Hd44780;
use strongbox_drivers::led::GpioLeds;
use strongbox_drivers::serial::SerialDiagnostic;

use crate::channels::INPUT_CHANNEL;

/// Lock controller wired to this board's peripherals
pub type BoardLock = LockController<
    Hd44780<Output<'static>, Delay>,
    GpioLeds<Output<'static>>,
    SerialDiagnostic<BufferedUartTx>,
>;

/// Lock task - main coordination loop
#[embassy_executor::task]
pub async fn lock_task(mut lock: BoardLock) {
    info!("Lock task started");

    lock.boot();
    info!("Waiting for a code, state {}", lock.state());

    loop {
        let input = INPUT_CHANNEL.receive().await;

        if let Input::Press(digit) = input {
            trace!("Press {} in {}", digit.value(), lock.state());
        }

        if let Some(event) = lock.process(input) {
            log_event(event, &lock);
        }

        if lock.diag_mut().take_write_failed() {
            warn!("Diagnostic UART write failed");
        }
    }
}

fn log_event(event: Event, lock: &BoardLock) {
    if event.is_refusal() {
        warn!(
            "{}: {} attempts left",
            event,
            lock.remaining_attempts()
        );
    }

    match event {
        Event::CodeSet => info!("Code set, safe locked"),
        Event::AccessGranted => info!("Access granted"),
        Event::AccessDenied => {}
        Event::AttemptsExhausted => warn!(
            "Keypad disabled for {}s",
            lock.config().lockout_s
        ),
        Event::LockoutExpired => info!("Lockout expired, keypad enabled"),
    }
    debug!("State now {}", lock.state());
}
