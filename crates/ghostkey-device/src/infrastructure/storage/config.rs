//! TOML-based configuration for the injector.
//!
//! Reads `AppConfig` from the platform-appropriate config file
//! unless an explicit path is given:
//! - Linux:    `$XDG_CONFIG_HOME/ghostkey/config.toml` or `~/.config/ghostkey/config.toml`
//! - Windows:  `%APPDATA%\Ghostkey\config.toml`
//! - macOS:    `~/Library/Application Support/Ghostkey/config.toml`
//!
//! Example:
//!
//! ```toml
//! [device]
//! hid_path = "/dev/hidg0"
//! log_level = "info"
//!
//! [injection]
//! mode = "scan_code"
//! unsupported = "skip_unsupported"
//!
//! [pacing]
//! inter_char_delay_ms = 20
//! key_dwell_ms = 250
//! ```
//!
//! # Serde default values
//!
//! Every section and every field has a default, so an empty file, a file with
//! only `[pacing]`, or no file at all all produce a usable configuration.

use std::path::{Path, PathBuf};

use ghostkey_core::{InjectionMode, PacingConfig, UnsupportedPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub injection: InjectionConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
}

/// Where keystrokes go and how loudly we log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceConfig {
    /// HID gadget character device.
    #[serde(default = "default_hid_path")]
    pub hid_path: PathBuf,
    /// `tracing` level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Default mode and unsupported-character policy for typed payloads.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InjectionConfig {
    #[serde(default)]
    pub mode: InjectionMode,
    #[serde(default)]
    pub unsupported: UnsupportedPolicy,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_hid_path() -> PathBuf {
    PathBuf::from("/dev/hidg0")
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            hid_path: default_hid_path(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Logs settings that are accepted but likely to misbehave on a real host.
    pub fn warn_suspicious(&self) {
        if self.pacing.key_dwell_ms == 0 {
            warn!("pacing.key_dwell_ms is 0; hosts may miss keystrokes");
        }
        if self.injection.unsupported == UnsupportedPolicy::DivertToDirectAscii
            && self.injection.mode != InjectionMode::ScanCode
        {
            warn!(
                mode = %self.injection.mode,
                "injection.unsupported only applies to scan_code mode"
            );
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from `path`, returning the defaults if the file does not
/// exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Loads `AppConfig` from the platform config file.
///
/// # Errors
///
/// See [`config_file_path`] and [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Resolves the platform config base directory including the `ghostkey`
/// subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Ghostkey"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("ghostkey"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Ghostkey")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
