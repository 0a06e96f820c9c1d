//! Keypad scan task

use defmt::*;
use embassy_rp::gpio::Input as InputPin;
use embassy_time::{Duration, Ticker};

use strongbox_core::input::Input;
use strongbox_drivers::keypad::Keypad;

use crate::channels::INPUT_CHANNEL;

/// Scan interval in milliseconds
pub const SCAN_INTERVAL_MS: u64 = 5;

/// Ten keys, one GPIO each
pub type BoardKeypad = Keypad<InputPin<'static>, 10>;

/// Keypad task - polls the keys and queues every new press
///
/// Presses are never dropped; the task waits for room in the queue.
#[embassy_executor::task]
pub async fn keypad_task(mut keypad: BoardKeypad) {
    info!("Keypad task started");

    let mut ticker = Ticker::every(Duration::from_millis(SCAN_INTERVAL_MS));

    loop {
        ticker.next().await;

        for digit in keypad.poll() {
            trace!("Key {}", digit.value());
            INPUT_CHANNEL.send(Input::Press(digit)).await;
        }
    }
}
