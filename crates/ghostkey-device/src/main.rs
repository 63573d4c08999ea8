//! Ghostkey entry point.
//!
//! Types one payload into the host through the USB HID gadget and exits.
//!
//! # Usage
//!
//! ```text
//! ghostkey [OPTIONS] <TEXT>
//!
//! Options:
//!   --config <PATH>          Config file [default: platform config dir]
//!   --device <PATH>          HID gadget node [default: from config, /dev/hidg0]
//!   --mode <MODE>            scan_code | direct_ascii | host_localized
//!   --profile <PROFILE>      slow | fast (mode and pacing preset)
//!   --enter                  Press Enter after the payload
//!   --start-delay-ms <MS>    Wait before typing [default: 0]
//!   --list-unsupported       Print characters scan-code mode would skip, type nothing
//! ```
//!
//! # Precedence
//!
//! CLI flag, then `GHOSTKEY_*` environment variable, then config file, then
//! built-in default.  `--mode` wins over the mode implied by `--profile`;
//! `--profile` replaces the configured pacing.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ghostkey_core::{InjectionMode, TypingProfile, SCAN_CODE_TABLE};
use ghostkey_device::application::hid_output::Delay;
use ghostkey_device::application::inject::InjectionEngine;
use ghostkey_device::infrastructure::delay::ThreadDelay;
use ghostkey_device::infrastructure::hid_output::HidGadgetOutput;
use ghostkey_device::infrastructure::storage::config::{self, AppConfig};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Command-line spelling of [`TypingProfile`].
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    Slow,
    Fast,
}

impl From<Profile> for TypingProfile {
    fn from(p: Profile) -> Self {
        match p {
            Profile::Slow => TypingProfile::Slow,
            Profile::Fast => TypingProfile::Fast,
        }
    }
}

/// Layout-independent keystroke injector for USB HID gadgets.
#[derive(Debug, Parser)]
#[command(name = "ghostkey", version)]
struct Cli {
    /// Config file to read instead of the platform default.
    #[arg(long, env = "GHOSTKEY_CONFIG")]
    config: Option<PathBuf>,

    /// HID gadget device node.
    #[arg(long, env = "GHOSTKEY_DEVICE")]
    device: Option<PathBuf>,

    /// Injection mode.
    #[arg(long, env = "GHOSTKEY_MODE")]
    mode: Option<InjectionMode>,

    /// Typing preset: `slow` is scan codes with conservative pacing, `fast`
    /// is host-localized text with short delays.
    #[arg(long, value_enum, env = "GHOSTKEY_PROFILE")]
    profile: Option<Profile>,

    /// Press Enter after the payload.
    #[arg(long)]
    enter: bool,

    /// Milliseconds to wait before the first keystroke, e.g. while the host
    /// enumerates the device.
    #[arg(long, default_value_t = 0, env = "GHOSTKEY_START_DELAY_MS")]
    start_delay_ms: u32,

    /// Print the characters scan-code mode cannot type, then exit.
    #[arg(long)]
    list_unsupported: bool,

    /// Text to type.
    text: String,
}

fn load(cli: &Cli) -> anyhow::Result<AppConfig> {
    match &cli.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => config::load_config().context("failed to load config"),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = load(&cli)?;

    // `RUST_LOG` wins; otherwise the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cfg.device.log_level)),
        )
        .init();

    cfg.warn_suspicious();

    if cli.list_unsupported {
        for c in SCAN_CODE_TABLE.unsupported_chars(&cli.text) {
            println!("{}", c.escape_debug());
        }
        return Ok(());
    }

    let profile = cli.profile.map(TypingProfile::from);
    let mode = cli
        .mode
        .or(profile.map(TypingProfile::mode))
        .unwrap_or(cfg.injection.mode);
    let pacing = profile.map_or(cfg.pacing, TypingProfile::pacing);
    let hid_path = cli.device.clone().unwrap_or(cfg.device.hid_path.clone());

    info!(
        device = %hid_path.display(),
        %mode,
        chars = cli.text.chars().count(),
        enter = cli.enter,
        "ghostkey starting"
    );

    let output = HidGadgetOutput::open(&hid_path)
        .with_context(|| format!("cannot open HID gadget {}", hid_path.display()))?;
    let mut delay = ThreadDelay;
    delay.pause(cli.start_delay_ms);

    let mut engine =
        InjectionEngine::new(output, delay).with_unsupported_policy(cfg.injection.unsupported);
    let report = engine.type_text(&cli.text, mode, &pacing, cli.enter);

    info!(
        emitted = report.emitted,
        skipped = report.skipped,
        diverted = report.diverted,
        enter_sent = report.enter_sent,
        dropped_reports = engine.output().dropped_reports(),
        "ghostkey finished"
    );
    Ok(())
}
