//! Direct-wired keypad
//!
//! One input pin per key. The firmware polls [`Keypad::poll`] at a fixed
//! rate and forwards each returned digit as a press.

pub mod debounce;

pub use debounce::Debouncer;

use embedded_hal::digital::InputPin;
use heapless::Vec;

use strongbox_core::lock::Digit;

/// Samples a key must read pressed before it counts (5 ms polling)
pub const DEFAULT_DEBOUNCE_SAMPLES: u8 = 4;

/// Keypad with one pin per key
pub struct Keypad<P, const N: usize> {
    pins: [P; N],
    keymap: [Digit; N],
    /// If true, a pressed key reads HIGH
    active_high: bool,
    debouncer: Debouncer<N>,
}

impl<P: InputPin, const N: usize> Keypad<P, N> {
    /// Create a keypad
    ///
    /// # Arguments
    /// - `pins`: One input per key
    /// - `keymap`: Digit produced by each pin, same order as `pins`
    /// - `active_high`: If false, keys pull the pin to ground (pull-ups)
    pub fn new(pins: [P; N], keymap: [Digit; N], active_high: bool) -> Self {
        Self {
            pins,
            keymap,
            active_high,
            debouncer: Debouncer::new(DEFAULT_DEBOUNCE_SAMPLES),
        }
    }

    /// Use a different debounce threshold
    pub fn with_debounce(mut self, samples: u8) -> Self {
        self.debouncer = Debouncer::new(samples);
        self
    }

    /// Sample every key once and return digits that were just pressed
    ///
    /// A pin that fails to read is treated as released.
    pub fn poll(&mut self) -> Vec<Digit, N> {
        let mut raw = 0u32;
        for (i, pin) in self.pins.iter_mut().enumerate() {
            let level = if self.active_high {
                pin.is_high()
            } else {
                pin.is_low()
            };
            if level.unwrap_or(false) {
                raw |= 1 << i;
            }
        }

        let newly = self.debouncer.update(raw);
        let mut digits = Vec::new();
        for (i, digit) in self.keymap.iter().enumerate() {
            if newly & (1 << i) != 0 {
                // Capacity is N, one slot per key
                let _ = digits.push(*digit);
            }
        }
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;

    struct MockPin<'a> {
        low: &'a Cell<bool>,
    }

    impl embedded_hal::digital::ErrorType for MockPin<'_> {
        type Error = Infallible;
    }

    impl InputPin for MockPin<'_> {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.low.get())
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(self.low.get())
        }
    }

    fn digit(n: u8) -> Digit {
        Digit::try_from(n).unwrap()
    }

    #[test]
    fn test_press_emits_mapped_digit_once() {
        let k0 = Cell::new(false);
        let k1 = Cell::new(false);
        let mut keypad = Keypad::new(
            [MockPin { low: &k0 }, MockPin { low: &k1 }],
            [digit(7), digit(3)],
            false,
        )
        .with_debounce(2);

        k1.set(true);
        assert!(keypad.poll().is_empty());
        assert_eq!(keypad.poll().as_slice(), &[digit(3)]);
        assert!(keypad.poll().is_empty());

        k1.set(false);
        keypad.poll();
        keypad.poll();
        k0.set(true);
        keypad.poll();
        assert_eq!(keypad.poll().as_slice(), &[digit(7)]);
    }

    #[test]
    fn test_active_high_polarity() {
        let low = Cell::new(true);
        let mut keypad = Keypad::new([MockPin { low: &low }], [digit(0)], true).with_debounce(1);
        assert!(keypad.poll().is_empty());
        low.set(false);
        assert_eq!(keypad.poll().as_slice(), &[digit(0)]);
    }
}
