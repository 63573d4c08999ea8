//! Linux USB gadget keyboard backend.
//!
//! With the `configfs` HID function bound, the kernel exposes the keyboard
//! interface as a character device (`/dev/hidg0`).  Every 8-byte write to it
//! becomes one boot keyboard input report on the host.
//!
//! The backend keeps the currently held keys in a [`KeyboardReport`]:
//! `press_key` adds to it and sends the whole report, `release_all_keys`
//! clears it and sends the empty report.  The host-text primitives
//! (`write_char` / `write_line`) have no host-side text service on a plain
//! boot keyboard, so they are emulated with the US table and one
//! press/release pair per character.  Newline, tab and backspace go out as
//! Enter, Tab and Backspace.
//!
//! `HidOutput` is infallible: a failed write is logged and counted, and the
//! engine carries on with the next keystroke.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use ghostkey_core::{lookup, HidKeyCode, KeyboardReport};
use thiserror::Error;
use tracing::{debug, warn};

use crate::application::hid_output::HidOutput;

/// Errors raised while acquiring the gadget device.
#[derive(Debug, Error)]
pub enum HidError {
    /// The device node could not be opened for writing.
    #[error("HID gadget {path} unavailable: {source}")]
    DeviceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Boot keyboard output over any byte sink; `File` in production.
#[derive(Debug)]
pub struct HidGadgetOutput<W: Write> {
    sink: W,
    held: KeyboardReport,
    dropped_reports: u64,
}

impl HidGadgetOutput<File> {
    /// Opens the gadget device node for writing.
    ///
    /// # Errors
    ///
    /// Returns [`HidError::DeviceUnavailable`] if the node is missing or the
    /// process lacks write permission.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HidError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|source| HidError::DeviceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "opened HID gadget");
        Ok(Self::new(file))
    }
}

impl<W: Write> HidGadgetOutput<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            held: KeyboardReport::new(),
            dropped_reports: 0,
        }
    }

    /// Number of reports whose write failed since construction.
    pub fn dropped_reports(&self) -> u64 {
        self.dropped_reports
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn send(&mut self, report: KeyboardReport) {
        if let Err(e) = self.sink.write_all(&report.to_bytes()) {
            self.dropped_reports += 1;
            warn!(error = %e, dropped = self.dropped_reports, "HID report write failed");
        }
    }

    /// Press-and-release of one key, optionally with Left Shift, independent
    /// of any keys held through `press_key`.
    fn tap(&mut self, key: HidKeyCode, shift: bool) {
        let mut report = KeyboardReport::new();
        if shift {
            report.press(HidKeyCode::ShiftLeft);
        }
        report.press(key);
        self.send(report);
        self.send(KeyboardReport::new());
    }
}

/// Control characters the text primitive types with a dedicated key.  The
/// scan-code table has none of these, so they are what a diverted character
/// can actually reach the host as.
fn control_key(c: char) -> Option<HidKeyCode> {
    match c {
        '\n' => Some(HidKeyCode::Enter),
        '\t' => Some(HidKeyCode::Tab),
        '\x08' => Some(HidKeyCode::Backspace),
        _ => None,
    }
}

impl<W: Write> HidOutput for HidGadgetOutput<W> {
    fn press_key(&mut self, key: HidKeyCode) {
        if !self.held.press(key) {
            debug!(?key, "key not added to report (unknown or rollover)");
            return;
        }
        let report = self.held;
        self.send(report);
    }

    fn release_all_keys(&mut self) {
        self.held.clear();
        self.send(KeyboardReport::new());
    }

    fn write_char(&mut self, c: char) {
        match control_key(c) {
            Some(key) => self.tap(key, false),
            None => match lookup(c) {
                Some(spec) => self.tap(spec.keycode, spec.needs_shift),
                None => debug!(ch = ?c, "no key for character, dropped"),
            },
        }
    }

    fn write_line(&mut self, line: &str) {
        for c in line.chars() {
            self.write_char(c);
        }
        self.tap(HidKeyCode::Enter, false);
    }
}
