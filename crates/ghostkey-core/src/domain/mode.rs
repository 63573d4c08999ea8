//! How characters reach the host.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which emitter the engine uses for a whole payload.
///
/// The engine never switches mode partway through a payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectionMode {
    /// Raw scan codes from the US reference table. Layout-independent.
    #[default]
    ScanCode,
    /// Each character handed to the HID output's own character primitive.
    /// Correct only when the host layout matches that primitive's assumptions.
    DirectAscii,
    /// The whole line handed to the HID output's line primitive in one call.
    /// Fastest, and just as layout-dependent as `DirectAscii`.
    HostLocalized,
}

/// What the engine does with a character the scan-code table cannot express.
///
/// Only consulted in [`InjectionMode::ScanCode`]; the other modes hand every
/// character to the HID output unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedPolicy {
    /// Drop the character and carry on with the rest of the payload.
    #[default]
    SkipUnsupported,
    /// Send the character through the direct-ASCII emitter instead.
    DivertToDirectAscii,
}

/// Error returned when parsing an [`InjectionMode`] from text.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown injection mode {0:?} (expected scan_code, direct_ascii or host_localized)")]
pub struct ParseModeError(pub String);

impl InjectionMode {
    /// Config/CLI spelling of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            InjectionMode::ScanCode => "scan_code",
            InjectionMode::DirectAscii => "direct_ascii",
            InjectionMode::HostLocalized => "host_localized",
        }
    }
}

impl fmt::Display for InjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InjectionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "scan_code" | "scancode" => Ok(InjectionMode::ScanCode),
            "direct_ascii" | "ascii" => Ok(InjectionMode::DirectAscii),
            "host_localized" | "host" => Ok(InjectionMode::HostLocalized),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
