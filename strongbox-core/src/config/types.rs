//! Configuration type definitions
//!
//! These types represent the device configuration, parsed at boot from the
//! TOML file embedded in the firmware.

use heapless::String;

/// Maximum banner length (one display line)
pub const MAX_BANNER_LEN: usize = 16;

/// Default banner shown on the top line
pub const DEFAULT_BANNER: &str = "O'DELL SECURITY";

/// Allowed attempts before lockout (single digit on screen)
pub const MAX_ATTEMPTS_MIN: u8 = 1;
pub const MAX_ATTEMPTS_MAX: u8 = 9;

/// Allowed lockout duration in seconds (countdown fits two cells)
pub const LOCKOUT_S_MIN: u8 = 1;
pub const LOCKOUT_S_MAX: u8 = 98;

/// Lock policy
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockConfig {
    /// Attempts allowed after arming or re-enabling
    pub max_attempts: u8,
    /// Lockout duration in seconds
    pub lockout_s: u8,
    /// Top-line banner
    pub banner: String<MAX_BANNER_LEN>,
}

impl LockConfig {
    /// Lockout duration in milliseconds
    pub fn lockout_ms(&self) -> u32 {
        self.lockout_s as u32 * 1000
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        let mut banner = String::new();
        let _ = banner.push_str(DEFAULT_BANNER);
        Self {
            max_attempts: 3,
            lockout_s: 60,
            banner,
        }
    }
}

/// Diagnostic serial port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    /// Baud rate in bits per second
    pub baud: u32,
    /// Send a NUL byte after every message
    pub nul_terminate: bool,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud: 9600,
            nul_terminate: true,
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// Lock policy
    pub lock: LockConfig,
    /// Diagnostic serial port
    pub serial: SerialConfig,
}
