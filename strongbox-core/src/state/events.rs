//! Events that trigger state transitions

/// Outcomes the controller feeds into the state machine
///
/// Raw keypad digits and ticks are turned into one of these by the
/// lock controller; the state machine itself never sees digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Code entry events
    /// Four digits entered while unset or unlocked
    CodeSet,
    /// Attempt matched the stored passcode
    AccessGranted,
    /// Attempt did not match and attempts remain
    AccessDenied,
    /// Final allowed attempt entered
    AttemptsExhausted,

    // Timer events
    /// Lockout countdown reached zero
    LockoutExpired,
}

impl Event {
    /// Check if this event is a refused access
    pub fn is_refusal(&self) -> bool {
        matches!(self, Event::AccessDenied | Event::AttemptsExhausted)
    }
}
