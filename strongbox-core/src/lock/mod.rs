//! Code entry and the lock controller

pub mod attempts;
pub mod code;
pub mod controller;

pub use attempts::RemainingAttempts;
pub use code::{codes_match, Digit, EntryBuffer, InvalidDigit, Passcode, CODE_LEN};
pub use controller::LockController;
