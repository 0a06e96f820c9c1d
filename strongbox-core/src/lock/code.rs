//! Digits, passcodes and code entry

use heapless::Vec;

/// Number of digits in a passcode
pub const CODE_LEN: usize = 4;

/// A single keypad digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

/// Raw value was not a digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidDigit(pub u8);

impl Digit {
    /// All ten digits in keypad order 0..=9
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Numeric value (0-9)
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for this digit
    pub const fn as_ascii(self) -> u8 {
        b'0' + self.0
    }

    /// Parse an ASCII character ('0'..='9')
    pub fn from_ascii(c: u8) -> Result<Self, InvalidDigit> {
        if c.is_ascii_digit() {
            Ok(Digit(c - b'0'))
        } else {
            Err(InvalidDigit(c))
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(InvalidDigit(value))
        }
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

/// A complete 4-digit code
///
/// Used both for the stored passcode and for a finished attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Passcode([Digit; CODE_LEN]);

impl Passcode {
    /// Build a passcode from four digits
    pub const fn new(digits: [Digit; CODE_LEN]) -> Self {
        Self(digits)
    }

    /// Digits in entry order
    pub fn digits(&self) -> &[Digit; CODE_LEN] {
        &self.0
    }
}

/// Compare an attempt against the stored passcode
///
/// Positional over all digits; a single mismatch fails the whole attempt.
pub fn codes_match(passcode: &Passcode, attempt: &Passcode) -> bool {
    passcode
        .digits()
        .iter()
        .zip(attempt.digits().iter())
        .all(|(p, a)| p == a)
}

/// Digits accumulated towards a code
///
/// Holds at most [`CODE_LEN`] digits. Pushing the last digit hands the
/// finished code back and leaves the buffer empty.
#[derive(Debug, Clone, Default)]
pub struct EntryBuffer {
    digits: Vec<Digit, CODE_LEN>,
}

impl EntryBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self { digits: Vec::new() }
    }

    /// Number of digits entered so far (0..CODE_LEN)
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True when no digits have been entered
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Append a digit
    ///
    /// Returns the finished code when this was the last digit.
    pub fn push(&mut self, digit: Digit) -> Option<Passcode> {
        // Capacity is CODE_LEN and the buffer is drained when it fills,
        // so there is always room for one more.
        let _ = self.digits.push(digit);

        if self.digits.len() < CODE_LEN {
            return None;
        }

        let mut code = [Digit(0); CODE_LEN];
        code.copy_from_slice(&self.digits);
        self.digits.clear();
        Some(Passcode::new(code))
    }

    /// Discard any partial entry
    pub fn clear(&mut self) {
        self.digits.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn code(s: &[u8; 4]) -> Passcode {
        let mut digits = [Digit(0); CODE_LEN];
        for (d, c) in digits.iter_mut().zip(s.iter()) {
            *d = Digit::from_ascii(*c).unwrap();
        }
        Passcode::new(digits)
    }

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::try_from(0).unwrap().value(), 0);
        assert_eq!(Digit::try_from(9).unwrap().value(), 9);
        assert_eq!(Digit::try_from(10), Err(InvalidDigit(10)));
        assert_eq!(Digit::from_ascii(b'7').unwrap().as_ascii(), b'7');
        assert!(Digit::from_ascii(b'a').is_err());
    }

    #[test]
    fn test_entry_buffer_completes_on_fourth_digit() {
        let mut buf = EntryBuffer::new();
        assert!(buf.push(Digit(1)).is_none());
        assert!(buf.push(Digit(2)).is_none());
        assert!(buf.push(Digit(3)).is_none());
        assert_eq!(buf.len(), 3);

        let finished = buf.push(Digit(4));
        assert_eq!(finished, Some(code(b"1234")));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_single_mismatch_fails() {
        assert!(codes_match(&code(b"1234"), &code(b"1234")));
        assert!(!codes_match(&code(b"1234"), &code(b"1235")));
        assert!(!codes_match(&code(b"1234"), &code(b"0234")));
        assert!(!codes_match(&code(b"1234"), &code(b"4321")));
    }

    fn digits() -> impl Strategy<Value = [u8; 4]> {
        prop::array::uniform4(0u8..10)
    }

    fn to_code(raw: [u8; 4]) -> Passcode {
        Passcode::new(raw.map(|d| Digit::try_from(d).unwrap()))
    }

    proptest! {
        #[test]
        fn prop_match_iff_equal(p in digits(), a in digits()) {
            prop_assert_eq!(codes_match(&to_code(p), &to_code(a)), p == a);
        }

        #[test]
        fn prop_code_matches_itself(p in digits()) {
            prop_assert!(codes_match(&to_code(p), &to_code(p)));
        }
    }
}
