//! Inputs delivered to the lock controller
//!
//! Keypad presses and timer ticks share one queue so the controller
//! handles them strictly one at a time.

use crate::lock::Digit;

/// A message for the lock controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    /// A debounced key press
    Press(Digit),
    /// Periodic tick carrying a snapshot of the elapsed-time counter
    Tick {
        /// Milliseconds since boot
        now_ms: u32,
    },
}
