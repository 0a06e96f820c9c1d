//! Diagnostic stream over an `embedded-io` writer
//!
//! Bytes go out unbuffered. When `nul_terminate` is set every emitted
//! message is followed by a single 0x00 so a host can split the stream
//! into records; single-character echoes are never terminated.

use embedded_io::Write;

use strongbox_core::traits::DiagnosticOutput;

/// Message terminator
const NUL: u8 = 0x00;

/// Diagnostic output on a UART (or anything else implementing `Write`)
pub struct SerialDiagnostic<W> {
    writer: W,
    nul_terminate: bool,
    /// Latched on the first failed write, cleared by `take_write_failed`
    write_failed: bool,
}

impl<W: Write> SerialDiagnostic<W> {
    /// Wrap a writer
    pub fn new(writer: W, nul_terminate: bool) -> Self {
        Self {
            writer,
            nul_terminate,
            write_failed: false,
        }
    }

    /// Return and clear the write-failure flag
    pub fn take_write_failed(&mut self) -> bool {
        core::mem::take(&mut self.write_failed)
    }

    /// Borrow the underlying writer
    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.writer.write_all(bytes).is_err() {
            self.write_failed = true;
        }
    }
}

impl<W: Write> DiagnosticOutput for SerialDiagnostic<W> {
    fn send_char(&mut self, byte: u8) {
        self.write(&[byte]);
    }

    fn emit(&mut self, text: &str) {
        self.write(text.as_bytes());
        if self.nul_terminate {
            self.write(&[NUL]);
        }
    }
}
