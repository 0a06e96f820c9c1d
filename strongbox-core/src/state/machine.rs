//! State machine definition
//!
//! What the keypad does, what the LEDs show and whether the lockout
//! countdown runs is a function of the current state.

use super::events::Event;

/// Lock states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockState {
    /// Power-on, no code stored yet
    #[default]
    Unset,
    /// Code stored, waiting for an attempt
    Locked,
    /// Correct code entered; digits now set a new code
    Unlocked,
    /// Too many attempts; keypad ignored until the lockout expires
    Disabled,
}

/// What the status LEDs should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedIndication {
    /// Red on, green off
    Locked,
    /// Green on, red off
    Unlocked,
}

impl LockState {
    /// Check if keypad digits are accepted
    pub fn accepts_digits(&self) -> bool {
        !matches!(self, LockState::Disabled)
    }

    /// Check if entered digits form a new passcode (rather than an attempt)
    pub fn sets_code(&self) -> bool {
        matches!(self, LockState::Unset | LockState::Unlocked)
    }

    /// Check if the lockout countdown is running
    pub fn is_disabled(&self) -> bool {
        matches!(self, LockState::Disabled)
    }

    /// LED pattern for this state
    ///
    /// `None` leaves the LEDs as they were.
    pub fn led_indication(&self) -> Option<LedIndication> {
        match self {
            LockState::Locked => Some(LedIndication::Locked),
            LockState::Unlocked => Some(LedIndication::Unlocked),
            LockState::Unset | LockState::Disabled => None,
        }
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use LockState::*;

        match (self, event) {
            // Arming
            (Unset, CodeSet) => Locked,
            (Unlocked, CodeSet) => Locked,

            // Attempts
            (Locked, AccessGranted) => Unlocked,
            (Locked, AccessDenied) => Locked,
            (Locked, AttemptsExhausted) => Disabled,

            // Lockout
            (Disabled, LockoutExpired) => Locked,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arming_from_unset_and_unlocked() {
        assert_eq!(LockState::Unset.transition(Event::CodeSet), LockState::Locked);
        assert_eq!(
            LockState::Unlocked.transition(Event::CodeSet),
            LockState::Locked
        );
    }

    #[test]
    fn test_attempt_outcomes() {
        let locked = LockState::Locked;
        assert_eq!(locked.transition(Event::AccessGranted), LockState::Unlocked);
        assert_eq!(locked.transition(Event::AccessDenied), LockState::Locked);
        assert_eq!(
            locked.transition(Event::AttemptsExhausted),
            LockState::Disabled
        );
    }

    #[test]
    fn test_lockout_expiry() {
        assert_eq!(
            LockState::Disabled.transition(Event::LockoutExpired),
            LockState::Locked
        );
    }

    #[test]
    fn test_disabled_ignores_entry_events() {
        let events = [
            Event::CodeSet,
            Event::AccessGranted,
            Event::AccessDenied,
            Event::AttemptsExhausted,
        ];

        for event in events {
            assert_eq!(LockState::Disabled.transition(event), LockState::Disabled);
        }
    }

    #[test]
    fn test_unrelated_events_keep_state() {
        assert_eq!(
            LockState::Unset.transition(Event::AccessGranted),
            LockState::Unset
        );
        assert_eq!(
            LockState::Locked.transition(Event::CodeSet),
            LockState::Locked
        );
        assert_eq!(
            LockState::Unlocked.transition(Event::LockoutExpired),
            LockState::Unlocked
        );
    }

    #[test]
    fn test_led_indication() {
        assert_eq!(
            LockState::Locked.led_indication(),
            Some(LedIndication::Locked)
        );
        assert_eq!(
            LockState::Unlocked.led_indication(),
            Some(LedIndication::Unlocked)
        );
        assert_eq!(LockState::Unset.led_indication(), None);
        assert_eq!(LockState::Disabled.led_indication(), None);
    }

    #[test]
    fn test_digit_acceptance() {
        assert!(LockState::Unset.accepts_digits());
        assert!(LockState::Locked.accepts_digits());
        assert!(LockState::Unlocked.accepts_digits());
        assert!(!LockState::Disabled.accepts_digits());

        assert!(LockState::Unset.sets_code());
        assert!(LockState::Unlocked.sets_code());
        assert!(!LockState::Locked.sets_code());
    }
}
