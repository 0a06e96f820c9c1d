//! HD44780 character LCD driver
//!
//! Drives a 16x2 Hitachi HD44780 (or compatible) controller in 4-bit mode
//! over six GPIO pins: RS, EN and D4-D7. R/W is assumed tied to ground, so
//! the busy flag is never read and every command is followed by a fixed
//! settle delay instead.
//!
//! Initialization follows figure 24 of the datasheet: three "8-bit"
//! function-set nibbles, then the switch to 4-bit mode.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use strongbox_core::display::{Line, DISPLAY_COLS};
use strongbox_core::traits::DisplayAdapter;

// Commands
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x04;
const CMD_DISPLAY_CONTROL: u8 = 0x08;
const CMD_FUNCTION_SET: u8 = 0x20;
const CMD_SET_DDRAM_ADDR: u8 = 0x80;

// Entry mode flags
const ENTRY_LEFT: u8 = 0x02;

// Display control flags
const DISPLAY_ON: u8 = 0x04;
const CURSOR_ON: u8 = 0x02;
const BLINK_ON: u8 = 0x01;

// Function set flags
const TWO_LINE: u8 = 0x08;
const FONT_5X8: u8 = 0x00;
const FOUR_BIT: u8 = 0x00;

/// DDRAM address of the second row
const ROW1_OFFSET: u8 = 0x40;

/// Function-set nibble sent while the controller may still be in 8-bit mode
const WAKE_NIBBLE: u8 = 0x03;
/// Nibble that switches the interface to 4 bits
const FOUR_BIT_NIBBLE: u8 = 0x02;

/// RS pin level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Register {
    Command,
    Data,
}

/// HD44780 in 4-bit mode
///
/// All six pins share one type, which is what chip HALs hand out for
/// type-erased GPIO outputs.
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// D4, D5, D6, D7
    data: [P; 4],
    delay: D,
    display_control: u8,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create a driver; call [`init`](Self::init) before use
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
            display_control: DISPLAY_ON,
        }
    }

    /// Run the power-on initialization sequence
    ///
    /// Leaves the display on, cursor and blink off, text flowing left to
    /// right, and the screen cleared.
    pub fn init(&mut self) {
        // At least 40 ms after Vcc rises above 2.7 V
        self.delay.delay_ms(50);
        set(&mut self.rs, false);
        set(&mut self.en, false);

        self.write_nibble(WAKE_NIBBLE);
        self.delay.delay_us(4500);
        self.write_nibble(WAKE_NIBBLE);
        self.delay.delay_us(4500);
        self.write_nibble(WAKE_NIBBLE);
        self.delay.delay_us(150);
        self.write_nibble(FOUR_BIT_NIBBLE);

        self.command(CMD_FUNCTION_SET | FOUR_BIT | TWO_LINE | FONT_5X8);

        self.display_control = DISPLAY_ON;
        self.command(CMD_DISPLAY_CONTROL | self.display_control);

        self.clear_screen();

        self.command(CMD_ENTRY_MODE | ENTRY_LEFT);
    }

    /// Clear the screen and return the cursor home
    pub fn clear_screen(&mut self) {
        self.command(CMD_CLEAR);
        // Clear is the slow command
        self.delay.delay_us(2000);
    }

    /// Show or hide the underline cursor
    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.update_display_control(CURSOR_ON, visible);
    }

    /// Enable or disable cursor blink
    pub fn set_blink(&mut self, blink: bool) {
        self.update_display_control(BLINK_ON, blink);
    }

    /// Move the cursor; rows past the second clamp to the second
    pub fn set_cursor(&mut self, col: u8, row: u8) {
        let row_offset = if row >= 1 { ROW1_OFFSET } else { 0 };
        self.command(CMD_SET_DDRAM_ADDR | (col.wrapping_add(row_offset) & 0x7F));
    }

    /// Release the pins and delay
    pub fn release(self) -> (P, P, [P; 4], D) {
        (self.rs, self.en, self.data, self.delay)
    }

    fn update_display_control(&mut self, flag: u8, on: bool) {
        if on {
            self.display_control |= flag;
        } else {
            self.display_control &= !flag;
        }
        self.command(CMD_DISPLAY_CONTROL | self.display_control);
    }

    fn command(&mut self, value: u8) {
        self.send(value, Register::Command);
    }

    fn write_data(&mut self, value: u8) {
        self.send(value, Register::Data);
    }

    fn send(&mut self, value: u8, register: Register) {
        set(&mut self.rs, register == Register::Data);
        self.write_nibble(value >> 4);
        self.write_nibble(value & 0x0F);
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            set(pin, (nibble >> bit) & 1 == 1);
        }
        self.pulse_enable();
    }

    fn pulse_enable(&mut self) {
        set(&mut self.en, false);
        self.delay.delay_us(1);
        // Enable pulse must be > 450 ns
        set(&mut self.en, true);
        self.delay.delay_us(1);
        set(&mut self.en, false);
        // Commands need > 37 us to settle
        self.delay.delay_us(100);
    }
}

/// Drive a pin, ignoring the error
///
/// GPIO outputs on the supported chips are infallible.
fn set<P: OutputPin>(pin: &mut P, high: bool) {
    let _ = pin.set_state(PinState::from(high));
}

impl<P: OutputPin, D: DelayNs> DisplayAdapter for Hd44780<P, D> {
    fn render(&mut self, line1: &str, line2: &str) {
        for (row, text) in [(0u8, line1), (1u8, line2)] {
            self.set_cursor(0, row);
            let mut written = 0;
            for b in text.bytes().take(DISPLAY_COLS) {
                self.write_data(b);
                written += 1;
            }
            // Pad so shorter lines overwrite stale characters
            for _ in written..DISPLAY_COLS {
                self.write_data(b' ');
            }
        }
    }

    fn set_char(&mut self, line: Line, col: u8, ch: u8) {
        if col as usize >= DISPLAY_COLS {
            return;
        }
        self.set_cursor(col, line.index() as u8);
        self.write_data(ch);
    }

    fn clear(&mut self) {
        self.clear_screen();
    }
}
