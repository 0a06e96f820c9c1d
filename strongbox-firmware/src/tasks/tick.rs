//! Tick task for time-based updates
//!
//! Drives the lockout countdown and flushes deferred display clears.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use strongbox_core::input::Input;

use crate::channels::INPUT_CHANNEL;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 100;

/// Tick task - queues a timestamped tick every interval
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));
    let start = Instant::now();

    loop {
        ticker.next().await;

        // Wraps after ~49 days; the controller uses wrapping arithmetic
        let now_ms = start.elapsed().as_millis() as u32;

        INPUT_CHANNEL.send(Input::Tick { now_ms }).await;
    }
}
