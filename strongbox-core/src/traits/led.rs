//! Status LED trait

use crate::state::LedIndication;

/// Trait for the red/green status LED pair
pub trait StatusLeds {
    /// Show a lock indication
    fn show(&mut self, indication: LedIndication);

    /// Current indication, if one has been shown
    fn indication(&self) -> Option<LedIndication>;
}
