//! Inter-task communication channels
//!
//! Keypad presses and clock ticks share one queue so the lock controller
//! sees them in the order they happened.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use strongbox_core::input::Input;

/// Channel capacity for lock inputs
const INPUT_CHANNEL_SIZE: usize = 16;

/// Presses and ticks for the lock controller
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, Input, INPUT_CHANNEL_SIZE> =
    Channel::new();
