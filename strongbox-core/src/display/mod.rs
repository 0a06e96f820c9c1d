//! Display text and screen layouts
//!
//! The lock controller owns a [`DisplayText`] and rewrites it on every
//! state change; the display adapter only ever sees finished lines.

pub mod screens;
pub mod text;

pub use screens::{
    countdown_field, ATTEMPT_MASK_COL, COUNTDOWN_COL, COUNTDOWN_WIDTH, SET_CODE_MASK_COL,
};
pub use text::{DisplayText, Line, DISPLAY_COLS, DISPLAY_LINES, MASK_CHAR};
