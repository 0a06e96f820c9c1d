//! Lock controller
//!
//! Owns the passcode, the entry buffer, the attempt counter and the
//! lockout countdown. Turns keypad digits and timer ticks into state
//! machine events, and decides what the display, LEDs and diagnostic
//! stream show.

use core::fmt::Write;

use heapless::String;

use super::attempts::RemainingAttempts;
use super::code::{codes_match, Digit, EntryBuffer, Passcode, CODE_LEN};
use crate::config::LockConfig;
use crate::display::{
    countdown_field, DisplayText, Line, ATTEMPT_MASK_COL, COUNTDOWN_COL, SET_CODE_MASK_COL,
};
use crate::input::Input;
use crate::state::{Event, LockState};
use crate::traits::{DiagnosticOutput, DisplayAdapter, DisplayAdapterExt, StatusLeds};

const MSG_CODE_SET: &str = "\n\nCode Set - Safe Locked.";
const MSG_ENTER_CODE: &str = "\nEnter Code: ";
const MSG_GRANTED: &str = "\nCorrect Code // Access Granted";
const MSG_DENIED: &str = "\nIncorrect Code // Access Denied";
const MSG_DISABLED: &str = "\n\nToo many attempts. Safe temporarily disabled.";
const MSG_ENABLED: &str = "\n\nSafe enabled. Enter Code: ";

/// Lock controller
///
/// Generic over its collaborators so the whole state machine runs on the
/// host against mocks.
pub struct LockController<D, L, O> {
    display: D,
    leds: L,
    diag: O,
    config: LockConfig,
    state: LockState,
    /// Stored code (None until the first code is set)
    passcode: Option<Passcode>,
    /// Digits of the code or attempt being entered
    entry: EntryBuffer,
    attempts: RemainingAttempts,
    /// Tick timestamp the lockout started at
    lockout_started_ms: Option<u32>,
    /// Whole seconds left on the lockout, as last shown
    countdown_s: Option<u32>,
    text: DisplayText,
    /// Clear the glass before the next render
    clear_pending: bool,
}

impl<D: DisplayAdapter, L: StatusLeds, O: DiagnosticOutput> LockController<D, L, O> {
    /// Create a new controller in the unset state
    pub fn new(config: LockConfig, display: D, leds: L, diag: O) -> Self {
        let mut text = DisplayText::new();
        text.show_set_code(&config.banner);

        Self {
            display,
            leds,
            diag,
            attempts: RemainingAttempts::new(config.max_attempts),
            config,
            state: LockState::Unset,
            passcode: None,
            entry: EntryBuffer::new(),
            lockout_started_ms: None,
            countdown_s: None,
            text,
            clear_pending: false,
        }
    }

    /// Announce the device on the diagnostic stream
    pub fn boot(&mut self) {
        let mut msg: String<64> = String::new();
        let _ = write!(
            msg,
            "// {} //\nSet your {}-digit code: ",
            self.config.banner,
            CODE_LEN
        );
        self.diag.emit(&msg);
    }

    /// Get current state
    pub fn state(&self) -> LockState {
        self.state
    }

    /// Attempts left before lockout
    pub fn remaining_attempts(&self) -> u8 {
        self.attempts.get()
    }

    /// Digits accumulated in the current entry (0-3 between presses)
    pub fn digits_pressed(&self) -> usize {
        self.entry.len()
    }

    /// True once a passcode has been stored
    pub fn has_code(&self) -> bool {
        self.passcode.is_some()
    }

    /// Whole seconds left on the lockout, if one is running
    pub fn lockout_remaining_s(&self) -> Option<u32> {
        self.countdown_s
    }

    /// Text currently held for the display
    pub fn text(&self) -> &DisplayText {
        &self.text
    }

    /// Active configuration
    pub fn config(&self) -> &LockConfig {
        &self.config
    }

    /// Get access to the display adapter
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get access to the status LEDs
    pub fn leds(&self) -> &L {
        &self.leds
    }

    /// Get access to the diagnostic output
    pub fn diag(&self) -> &O {
        &self.diag
    }

    /// Get mutable access to the diagnostic output
    pub fn diag_mut(&mut self) -> &mut O {
        &mut self.diag
    }

    /// Dispatch a queued input
    pub fn process(&mut self, input: Input) -> Option<Event> {
        match input {
            Input::Press(digit) => self.handle_press(digit),
            Input::Tick { now_ms } => self.tick(now_ms),
        }
    }

    /// Handle a keypad digit
    ///
    /// Returns the state machine event when the digit finished a code.
    pub fn handle_press(&mut self, digit: Digit) -> Option<Event> {
        if !self.state.accepts_digits() {
            return None;
        }

        self.diag.send_char(digit.as_ascii());

        let origin = if self.state.sets_code() {
            SET_CODE_MASK_COL
        } else {
            ATTEMPT_MASK_COL
        };

        let finished = self.entry.push(digit);
        let count = match finished {
            Some(_) => CODE_LEN,
            None => self.entry.len(),
        };
        self.text.mask_digit(origin, count);

        let code = finished?;
        let event = if self.state.sets_code() {
            self.store_code(code)
        } else {
            self.check_attempt(code)
        };

        self.transition(event);
        Some(event)
    }

    /// Periodic update
    ///
    /// Runs the lockout countdown, re-renders the display and drives the
    /// LEDs. Returns [`Event::LockoutExpired`] when the safe re-enables.
    pub fn tick(&mut self, now_ms: u32) -> Option<Event> {
        let mut event = None;

        if self.state.is_disabled() {
            let started = *self.lockout_started_ms.get_or_insert(now_ms);
            let elapsed = now_ms.wrapping_sub(started);
            // The countdown starts one second above the lockout length
            let remaining_ms = (self.config.lockout_ms() + 1000).saturating_sub(elapsed);

            if remaining_ms < 1000 {
                let expired = self.enable();
                self.transition(expired);
                event = Some(expired);
            } else {
                self.countdown_s = Some(remaining_ms / 1000);
            }
        }

        if self.clear_pending {
            self.clear_pending = false;
            self.display.clear();
        }

        self.display
            .render(self.text.line(Line::Top), self.text.line(Line::Bottom));

        if let Some(seconds) = self.countdown_s {
            self.display
                .write_at(Line::Bottom, COUNTDOWN_COL as u8, &countdown_field(seconds));
        }

        if let Some(indication) = self.state.led_indication() {
            self.leds.show(indication);
        }

        event
    }

    fn transition(&mut self, event: Event) {
        self.state = self.state.transition(event);
    }

    /// Store a freshly entered code and lock
    fn store_code(&mut self, code: Passcode) -> Event {
        self.passcode = Some(code);

        self.diag.emit(MSG_CODE_SET);
        self.diag.emit(MSG_ENTER_CODE);

        self.clear_pending = true;
        self.text.show_enter_code(&self.config.banner);

        Event::CodeSet
    }

    /// Judge a finished attempt
    ///
    /// The last allowed attempt disables the safe before the code is
    /// compared.
    fn check_attempt(&mut self, attempt: Passcode) -> Event {
        if self.attempts.is_last() {
            return self.disable();
        }

        let matches = self
            .passcode
            .as_ref()
            .is_some_and(|passcode| codes_match(passcode, &attempt));

        if matches {
            self.diag.emit(MSG_GRANTED);
            self.text.show_access_granted();
            Event::AccessGranted
        } else {
            self.attempts.consume();
            self.diag.emit(MSG_DENIED);
            self.diag.emit(MSG_ENTER_CODE);
            self.text.show_attempts_left(self.attempts.get());
            Event::AccessDenied
        }
    }

    fn disable(&mut self) -> Event {
        self.attempts.exhaust();
        self.entry.clear();
        self.lockout_started_ms = None;

        self.diag.emit(MSG_DISABLED);
        self.text.show_disabled();

        Event::AttemptsExhausted
    }

    fn enable(&mut self) -> Event {
        self.attempts = RemainingAttempts::new(self.config.max_attempts);
        self.entry.clear();
        self.lockout_started_ms = None;
        self.countdown_s = None;

        self.clear_pending = true;
        self.diag.emit(MSG_ENABLED);
        self.text.show_attempts_left(self.attempts.get());

        Event::LockoutExpired
    }
}
