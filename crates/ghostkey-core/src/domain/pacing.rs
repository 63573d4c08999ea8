//! Keystroke timing.
//!
//! [`PacingConfig`] holds every wait the engine performs.  None of the values
//! are validated: a zero dwell is accepted and simply makes delivery less
//! reliable on hosts that debounce.

use serde::{Deserialize, Serialize};

use crate::domain::mode::InjectionMode;

/// Durations (milliseconds) for one injection.
///
/// ```text
///  Shift ──┐ shift_lead ┌───────── key_dwell ─────────┐ release all ┐ post_release ┐ inter_char
///  Key   ──┴────────────┘ (Shift + key held together)  └─────────────┴──────────────┴──────────▶ next
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Gap between consecutive characters ("typing speed").
    #[serde(default = "default_inter_char_delay_ms")]
    pub inter_char_delay_ms: u32,
    /// How long the primary key (and Shift, if any) stay asserted.
    #[serde(default = "default_key_dwell_ms")]
    pub key_dwell_ms: u32,
    /// How long Shift is held alone before the primary key goes down.
    #[serde(default = "default_shift_lead_ms")]
    pub shift_lead_ms: u32,
    /// Quiet time after the batched release, before anything else is sent.
    #[serde(default = "default_post_release_ms")]
    pub post_release_ms: u32,
    /// Settle time after the trailing Enter of a command line.
    #[serde(default = "default_enter_settle_ms")]
    pub enter_settle_ms: u32,
}

fn default_inter_char_delay_ms() -> u32 {
    20
}
fn default_key_dwell_ms() -> u32 {
    250
}
fn default_shift_lead_ms() -> u32 {
    250
}
fn default_post_release_ms() -> u32 {
    50
}
fn default_enter_settle_ms() -> u32 {
    100
}

impl PacingConfig {
    /// Long holds that survive slow or debouncing host stacks.
    pub fn conservative() -> Self {
        Self {
            inter_char_delay_ms: default_inter_char_delay_ms(),
            key_dwell_ms: default_key_dwell_ms(),
            shift_lead_ms: default_shift_lead_ms(),
            post_release_ms: default_post_release_ms(),
            enter_settle_ms: default_enter_settle_ms(),
        }
    }

    /// Short holds for hosts known to keep up.
    pub fn fast() -> Self {
        Self {
            inter_char_delay_ms: 5,
            key_dwell_ms: 10,
            shift_lead_ms: 10,
            post_release_ms: 5,
            enter_settle_ms: default_enter_settle_ms(),
        }
    }

    /// No waits at all.  Useful against recording outputs in tests.
    pub fn immediate() -> Self {
        Self {
            inter_char_delay_ms: 0,
            key_dwell_ms: 0,
            shift_lead_ms: 0,
            post_release_ms: 0,
            enter_settle_ms: 0,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self::conservative()
    }
}

/// Named presets pairing an injection mode with its pacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypingProfile {
    /// Every character as an explicit scan-code keystroke with long holds.
    #[default]
    Slow,
    /// The whole line through the host-side line primitive.
    Fast,
}

impl TypingProfile {
    /// Injection mode the preset types with.
    pub fn mode(self) -> InjectionMode {
        match self {
            TypingProfile::Slow => InjectionMode::ScanCode,
            TypingProfile::Fast => InjectionMode::HostLocalized,
        }
    }

    /// Timing the preset types with.
    pub fn pacing(self) -> PacingConfig {
        match self {
            TypingProfile::Slow => PacingConfig::conservative(),
            TypingProfile::Fast => PacingConfig::fast(),
        }
    }
}
