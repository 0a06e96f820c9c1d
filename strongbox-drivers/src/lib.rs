//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in strongbox-core for the safe's peripherals:
//!
//! - Character LCD (HD44780, 4-bit parallel)
//! - Red/green status LEDs on GPIO
//! - Diagnostic output over any `embedded-io` writer (UART)
//! - Direct-wired keypad with debouncing

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod keypad;
pub mod lcd;
pub mod led;
pub mod serial;
