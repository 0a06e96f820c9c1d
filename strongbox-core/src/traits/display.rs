//! Character display trait

use crate::display::Line;

/// Trait for the two-line character display
///
/// The display is a dumb terminal - all text layout happens in the core.
/// Implementations only move characters to the glass.
pub trait DisplayAdapter {
    /// Write both lines, starting at column 0
    ///
    /// Each line is at most 16 ASCII characters.
    fn render(&mut self, line1: &str, line2: &str);

    /// Write a single character at a position
    fn set_char(&mut self, line: Line, col: u8, ch: u8);

    /// Clear the entire screen
    fn clear(&mut self);
}

/// Helper trait for writing short strings over existing content
pub trait DisplayAdapterExt: DisplayAdapter {
    /// Write `text` starting at `col`, one character at a time
    fn write_at(&mut self, line: Line, col: u8, text: &str) {
        for (i, b) in text.bytes().enumerate() {
            self.set_char(line, col.saturating_add(i as u8), b);
        }
    }
}

// Blanket implementation for all DisplayAdapter types
impl<T: DisplayAdapter> DisplayAdapterExt for T {}
