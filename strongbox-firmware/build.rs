//! Build script for strongbox-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates strongbox.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Mirror of the on-device config, used only for validation
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct Config {
    lock: LockSection,
    serial: SerialSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct LockSection {
    max_attempts: i64,
    lockout_s: i64,
    banner: String,
}

impl Default for LockSection {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            lockout_s: 60,
            banner: "O'DELL SECURITY".into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct SerialSection {
    baud: i64,
    #[allow(dead_code)]
    nul_terminate: bool,
}

impl Default for SerialSection {
    fn default() -> Self {
        Self {
            baud: 9600,
            nul_terminate: true,
        }
    }
}

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate strongbox.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=strongbox.toml");

    let config_path = Path::new("strongbox.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: strongbox.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds strongbox.toml at build time.               ║\n\
            ║  Please create one in the strongbox-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read strongbox.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: Config = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid strongbox.toml                                   ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e.to_string()
                    .lines()
                    .map(|l| format!("║  {:<64} ║", l))
                    .collect::<Vec<_>>()
                    .join("\n")
            );
        }
    };

    let errors = check_ranges(&config);
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid strongbox configuration                          ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

/// Limits match strongbox-core's parser
fn check_ranges(config: &Config) -> Vec<String> {
    let mut errors = Vec::new();

    if !(1..=9).contains(&config.lock.max_attempts) {
        errors.push("[lock] max_attempts must be 1-9".to_string());
    }
    if !(1..=98).contains(&config.lock.lockout_s) {
        errors.push("[lock] lockout_s must be 1-98".to_string());
    }
    if config.lock.banner.len() > 16 {
        errors.push("[lock] banner must be at most 16 characters".to_string());
    }
    if !config.lock.banner.is_ascii() {
        errors.push("[lock] banner must be ASCII".to_string());
    }
    if config.serial.baud <= 0 || config.serial.baud > u32::MAX as i64 {
        errors.push("[serial] baud must be a positive 32-bit value".to_string());
    }

    errors
}
