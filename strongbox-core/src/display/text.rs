//! Two-line text buffer
//!
//! Mirrors the 16x2 character display. Writes outside the 16 columns are
//! dropped, and non-ASCII characters are shown as `?`.

/// Number of characters per line
pub const DISPLAY_COLS: usize = 16;

/// Number of lines
pub const DISPLAY_LINES: usize = 2;

/// Character shown for an entered digit
pub const MASK_CHAR: u8 = b'*';

/// Display line selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// First (upper) line
    Top,
    /// Second (lower) line
    Bottom,
}

impl Line {
    /// Zero-based row index
    pub const fn index(self) -> usize {
        match self {
            Line::Top => 0,
            Line::Bottom => 1,
        }
    }
}

/// Text content of both display lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    lines: [[u8; DISPLAY_COLS]; DISPLAY_LINES],
}

impl DisplayText {
    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            lines: [[b' '; DISPLAY_COLS]; DISPLAY_LINES],
        }
    }

    /// Blank both lines
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.fill(b' ');
        }
    }

    /// Replace both lines wholesale
    pub fn set_lines(&mut self, top: &str, bottom: &str) {
        self.clear();
        self.set_region(Line::Top, 0, top);
        self.set_region(Line::Bottom, 0, bottom);
    }

    /// Overwrite part of a line starting at `col`
    pub fn set_region(&mut self, line: Line, col: usize, text: &str) {
        for (i, b) in text.bytes().enumerate() {
            self.set_char(line, col + i, b);
        }
    }

    /// Overwrite a single character
    pub fn set_char(&mut self, line: Line, col: usize, ch: u8) {
        if col >= DISPLAY_COLS {
            return;
        }
        let ch = if ch.is_ascii() && !ch.is_ascii_control() {
            ch
        } else {
            b'?'
        };
        self.lines[line.index()][col] = ch;
    }

    /// Fill `len` characters starting at `col`
    pub fn fill(&mut self, line: Line, col: usize, len: usize, ch: u8) {
        for c in col..col.saturating_add(len) {
            self.set_char(line, c, ch);
        }
    }

    /// Character at a position (space when out of range)
    pub fn char_at(&self, line: Line, col: usize) -> u8 {
        self.lines[line.index()].get(col).copied().unwrap_or(b' ')
    }

    /// Full line, padded with spaces to 16 columns
    pub fn line(&self, line: Line) -> &str {
        // Only printable ASCII is ever stored
        core::str::from_utf8(&self.lines[line.index()]).unwrap_or("")
    }
}

impl Default for DisplayText {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_blank() {
        let text = DisplayText::new();
        assert_eq!(text.line(Line::Top), "                ");
        assert_eq!(text.line(Line::Bottom).len(), DISPLAY_COLS);
    }

    #[test]
    fn test_set_lines_overwrites_wholesale() {
        let mut text = DisplayText::new();
        text.set_lines("Correct Code", "Access Granted");
        text.set_lines("Safe Disabled.", "Try again in:");
        assert_eq!(text.line(Line::Top), "Safe Disabled.  ");
        assert_eq!(text.line(Line::Bottom), "Try again in:   ");
    }

    #[test]
    fn test_region_truncates_at_edge() {
        let mut text = DisplayText::new();
        text.set_region(Line::Bottom, 14, "abcd");
        assert_eq!(text.line(Line::Bottom), "              ab");
    }

    #[test]
    fn test_set_char_and_fill() {
        let mut text = DisplayText::new();
        text.fill(Line::Top, 2, 3, b'*');
        text.set_char(Line::Top, 3, b' ');
        text.set_char(Line::Top, 40, b'x');
        assert_eq!(text.line(Line::Top), "  * *           ");
        assert_eq!(text.char_at(Line::Top, 2), b'*');
        assert_eq!(text.char_at(Line::Top, 99), b' ');
    }

    #[test]
    fn test_non_printable_replaced() {
        let mut text = DisplayText::new();
        text.set_char(Line::Top, 0, 0);
        text.set_char(Line::Top, 1, 0xC3);
        assert_eq!(&text.line(Line::Top)[..2], "??");
    }
}
