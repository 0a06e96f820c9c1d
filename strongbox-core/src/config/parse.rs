//! Simple TOML parser for the device configuration
//!
//! This is a minimal, allocation-free parser for the small subset of TOML
//! the configuration uses. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings
//! - Dotted keys

use heapless::String;

use super::types::{
    DeviceConfig, LOCKOUT_S_MAX, LOCKOUT_S_MIN, MAX_ATTEMPTS_MAX, MAX_ATTEMPTS_MIN,
    MAX_BANNER_LEN,
};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or syntax
    InvalidValue,
    /// Key not known in this section
    UnknownKey,
    /// String longer than its field
    TooLong,
    /// Number outside the allowed range
    OutOfRange,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Lock,
    Serial,
}

/// Parse TOML configuration into DeviceConfig
///
/// Keys that are absent keep their default values.
pub fn parse_config(input: &str) -> Result<DeviceConfig, ParseError> {
    let mut config = DeviceConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

/// Parse section header like "lock" or "serial"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "lock" => Ok(Section::Lock),
        "serial" => Ok(Section::Serial),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    let value = strip_comment(value);

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Cut a trailing comment: the first `#` outside a quoted string
fn strip_comment(value: &str) -> &str {
    let mut in_string = false;
    for (i, c) in value.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return value[..i].trim(),
            _ => {}
        }
    }
    value
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse an integer and check it against an inclusive range
fn parse_ranged(value: &str, min: u8, max: u8) -> Result<u8, ParseError> {
    let n: u32 = parse_int(value)?;
    if n < min as u32 || n > max as u32 {
        return Err(ParseError::OutOfRange);
    }
    Ok(n as u8)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Apply a key/value pair to the section being parsed
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DeviceConfig,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Lock, "max_attempts") => {
            config.lock.max_attempts = parse_ranged(value, MAX_ATTEMPTS_MIN, MAX_ATTEMPTS_MAX)?;
        }
        (Section::Lock, "lockout_s") => {
            config.lock.lockout_s = parse_ranged(value, LOCKOUT_S_MIN, LOCKOUT_S_MAX)?;
        }
        (Section::Lock, "banner") => {
            let banner = parse_string(value);
            if !banner.is_ascii() {
                return Err(ParseError::InvalidValue);
            }
            config.lock.banner =
                String::<MAX_BANNER_LEN>::try_from(banner).map_err(|_| ParseError::TooLong)?;
        }
        (Section::Serial, "baud") => {
            let baud: u32 = parse_int(value)?;
            if baud == 0 {
                return Err(ParseError::OutOfRange);
            }
            config.serial.baud = baud;
        }
        (Section::Serial, "nul_terminate") => {
            config.serial.nul_terminate = parse_bool(value)?;
        }
        _ => return Err(ParseError::UnknownKey),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_section_header() {
        assert_eq!(parse_section_header("lock"), Ok(Section::Lock));
        assert_eq!(parse_section_header(" serial "), Ok(Section::Serial));
        assert_eq!(
            parse_section_header("stepper"),
            Err(ParseError::InvalidSection)
        );
    }

    #[test]
    fn test_parse_key_value_strips_comments() {
        assert_eq!(
            parse_key_value("lockout_s = 30 # seconds"),
            Some(("lockout_s", "30"))
        );
        assert_eq!(
            parse_key_value(r#"banner = "ACME # SAFES""#),
            Some(("banner", r#""ACME # SAFES""#))
        );
        assert_eq!(
            parse_key_value(r#"banner = "A#B" # shop name"#),
            Some(("banner", r#""A#B""#))
        );
        assert_eq!(parse_key_value("banner = # only a comment"), None);
        assert_eq!(parse_key_value("nothing"), None);
        assert_eq!(parse_key_value("key ="), None);
    }

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
# Safe policy
[lock]
max_attempts = 5
lockout_s = 30
banner = "ACME SAFES"

[serial]
baud = 115200
nul_terminate = false
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.lock.max_attempts, 5);
        assert_eq!(config.lock.lockout_s, 30);
        assert_eq!(config.lock.banner.as_str(), "ACME SAFES");
        assert_eq!(config.serial.baud, 115200);
        assert!(!config.serial.nul_terminate);
    }

    #[test]
    fn test_quoted_hash_with_trailing_comment() {
        let config = parse_config("[lock]\nbanner = \"A#B\" # shop name\n").unwrap();
        assert_eq!(config.lock.banner.as_str(), "A#B");

        let config = parse_config("[lock]\nbanner = \"A#B\" #x\n").unwrap();
        assert_eq!(config.lock.banner.as_str(), "A#B");
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_config("[lock]\nlockout_s = 10\n").unwrap();
        assert_eq!(config.lock.lockout_s, 10);
        assert_eq!(config.lock.max_attempts, 3);
        assert_eq!(config.lock.banner.as_str(), "O'DELL SECURITY");
        assert_eq!(config.serial.baud, 9600);
        assert!(config.serial.nul_terminate);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), DeviceConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            parse_config("[lock]\nmax_attempts = 0"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_config("[lock]\nlockout_s = 120"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_config("[lock]\nlockout_s = soon"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[lock]\nbanner = \"THIS BANNER IS TOO LONG\""),
            Err(ParseError::TooLong)
        );
        assert_eq!(
            parse_config("[serial]\nnul_terminate = yes"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[serial]\nparity = none"),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(parse_config("max_attempts = 3"), Err(ParseError::UnknownKey));
        assert_eq!(parse_config("[heater]"), Err(ParseError::InvalidSection));
    }
}
