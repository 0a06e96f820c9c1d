//! Board-agnostic core logic for the keypad safe firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Digits, passcodes and the entry buffer
//! - State machine for lock/unlock/disable
//! - Lock controller (code entry, lockout countdown, rendering, logging)
//! - Two-line display text and the screens shown on it
//! - Collaborator traits (display, status LEDs, diagnostic output)
//! - Configuration types and the config file parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod input;
pub mod lock;
pub mod state;
pub mod traits;
