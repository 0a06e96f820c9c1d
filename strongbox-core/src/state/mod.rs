//! State machine for the lock
//!
//! The state machine is explicit, finite, and deterministic. Guards
//! (does the code match, is this the last attempt) are evaluated by the
//! controller, which then feeds the resulting [`Event`] in here.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{LedIndication, LockState};
