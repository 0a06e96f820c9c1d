//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod keypad;
pub mod lock;
pub mod tick;

pub use keypad::{keypad_task, BoardKeypad};
pub use lock::{lock_task, BoardLock};
pub use tick::tick_task;
