//! Screen layouts
//!
//! Builds the two display lines for each lock state. Column positions
//! match the prompts so the masked digits sit just after them:
//!
//! ```text
//!  0123456789012345
//!  Set Code: ****
//!  Enter Code: ****
//!  Try again in: 42
//! ```

use core::fmt::Write;

use heapless::String;

use super::text::{DisplayText, Line, DISPLAY_COLS, MASK_CHAR};
use crate::lock::CODE_LEN;

/// First mask column while setting a new code
pub const SET_CODE_MASK_COL: usize = 10;

/// First mask column while entering an attempt
pub const ATTEMPT_MASK_COL: usize = 12;

/// Column of the lockout countdown on the second line
pub const COUNTDOWN_COL: usize = 14;

/// Width of the lockout countdown field
pub const COUNTDOWN_WIDTH: usize = 2;

impl DisplayText {
    /// Power-on screen: banner and set-code prompt
    pub fn show_set_code(&mut self, banner: &str) {
        self.set_lines(banner, "Set Code:");
    }

    /// Code stored, safe locked
    pub fn show_enter_code(&mut self, banner: &str) {
        self.set_lines(banner, "Enter Code:");
    }

    /// Correct attempt
    pub fn show_access_granted(&mut self) {
        self.set_lines("Correct Code", "Access Granted");
    }

    /// Wrong attempt, or safe re-enabled: attempts left and prompt
    pub fn show_attempts_left(&mut self, remaining: u8) {
        let mut top: String<DISPLAY_COLS> = String::new();
        let noun = if remaining == 1 { "Attempt" } else { "Attempts" };
        let _ = write!(top, "{} {} Left", remaining, noun);
        self.set_lines(&top, "Enter Code:");
    }

    /// Lockout in progress; the countdown is overlaid separately
    pub fn show_disabled(&mut self) {
        self.set_lines("Safe Disabled.", "Try again in:");
    }

    /// Show the mask for the `count`-th digit of an entry
    ///
    /// The first digit blanks the whole mask region so leftovers from the
    /// previous screen don't read as entered digits. Only the four mask
    /// cells are touched; the cell before `origin` keeps whatever the
    /// current screen has there.
    pub fn mask_digit(&mut self, origin: usize, count: usize) {
        if count == 1 {
            self.fill(Line::Bottom, origin, CODE_LEN, b' ');
        }
        if count >= 1 {
            self.set_char(Line::Bottom, origin + count - 1, MASK_CHAR);
        }
    }
}

/// Format the countdown field (left aligned, space padded)
pub fn countdown_field(seconds: u32) -> String<COUNTDOWN_WIDTH> {
    let mut field: String<COUNTDOWN_WIDTH> = String::new();
    // Lockouts are capped below 99 s, so two cells always fit
    let _ = write!(field, "{}", seconds.min(99));
    while field.len() < COUNTDOWN_WIDTH {
        let _ = field.push(' ');
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempts_left_plural_and_singular() {
        let mut text = DisplayText::new();
        text.show_attempts_left(2);
        assert_eq!(text.line(Line::Top).trim_end(), "2 Attempts Left");
        assert_eq!(text.line(Line::Bottom).trim_end(), "Enter Code:");

        text.show_attempts_left(1);
        assert_eq!(text.line(Line::Top).trim_end(), "1 Attempt Left");
    }

    #[test]
    fn test_mask_progress() {
        let mut text = DisplayText::new();
        text.show_set_code("O'DELL SECURITY");

        text.mask_digit(SET_CODE_MASK_COL, 1);
        assert_eq!(text.line(Line::Bottom), "Set Code: *     ");
        text.mask_digit(SET_CODE_MASK_COL, 2);
        text.mask_digit(SET_CODE_MASK_COL, 3);
        assert_eq!(text.line(Line::Bottom), "Set Code: ***   ");
    }

    #[test]
    fn test_first_mask_clears_region() {
        let mut text = DisplayText::new();
        text.show_access_granted();
        text.mask_digit(SET_CODE_MASK_COL, 1);
        assert_eq!(text.line(Line::Bottom), "Access Gra*     ");
    }

    #[test]
    fn test_mask_leaves_cell_before_origin() {
        // Re-arming from the granted screen overwrites "nted" only
        let mut text = DisplayText::new();
        text.show_access_granted();
        for n in 1..=CODE_LEN {
            text.mask_digit(SET_CODE_MASK_COL, n);
        }
        assert_eq!(text.line(Line::Bottom), "Access Gra****  ");
    }

    #[test]
    fn test_attempt_mask_column() {
        let mut text = DisplayText::new();
        text.show_enter_code("O'DELL SECURITY");
        for n in 1..=4 {
            text.mask_digit(ATTEMPT_MASK_COL, n);
        }
        assert_eq!(text.line(Line::Bottom), "Enter Code: ****");
    }

    #[test]
    fn test_countdown_field() {
        assert_eq!(countdown_field(60).as_str(), "60");
        assert_eq!(countdown_field(2).as_str(), "2 ");
        assert_eq!(countdown_field(0).as_str(), "0 ");
    }
}
