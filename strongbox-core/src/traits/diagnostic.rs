//! Diagnostic output trait

/// Trait for the human-readable event stream (typically a UART)
///
/// Only [`send_char`](DiagnosticOutput::send_char) is required; strings are
/// built on top of it.
pub trait DiagnosticOutput {
    /// Send a single byte
    fn send_char(&mut self, byte: u8);

    /// Emit a message
    ///
    /// Implementations may append a terminator after each message.
    fn emit(&mut self, text: &str) {
        for b in text.bytes() {
            self.send_char(b);
        }
    }
}
