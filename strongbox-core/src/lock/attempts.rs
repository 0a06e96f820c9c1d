//! Remaining-attempts counter

/// Attempts left before the safe disables itself
///
/// Unsigned and decremented with saturation, so it never goes below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RemainingAttempts(u8);

impl RemainingAttempts {
    /// Start a fresh allowance
    pub const fn new(max: u8) -> Self {
        Self(max)
    }

    /// Attempts left
    pub const fn get(self) -> u8 {
        self.0
    }

    /// True when the next finished entry is the final allowed one
    pub const fn is_last(self) -> bool {
        self.0 <= 1
    }

    /// True once no attempts remain
    pub const fn is_exhausted(self) -> bool {
        self.0 == 0
    }

    /// Use up one attempt
    pub fn consume(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Use up every attempt
    pub fn exhaust(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_saturates() {
        let mut attempts = RemainingAttempts::new(2);
        assert!(!attempts.is_last());

        attempts.consume();
        assert_eq!(attempts.get(), 1);
        assert!(attempts.is_last());

        attempts.consume();
        attempts.consume();
        assert_eq!(attempts.get(), 0);
        assert!(attempts.is_exhausted());
    }

    #[test]
    fn test_exhaust() {
        let mut attempts = RemainingAttempts::new(3);
        attempts.exhaust();
        assert!(attempts.is_exhausted());
    }
}
