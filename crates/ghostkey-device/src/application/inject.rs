//! InjectionEngine: types a payload on the host.
//!
//! The engine owns the HID output and the delay source for its lifetime and
//! is stateless between calls: every [`InjectionEngine::type_text`] runs from
//! the first character to the last (and the optional Enter) before returning.
//! There is no queue and no cancellation.
//!
//! # Modes
//!
//! | Mode            | Per character                         | Trailing Enter          |
//! |-----------------|---------------------------------------|-------------------------|
//! | `ScanCode`      | table lookup → raw key emitter        | raw Enter keystroke     |
//! | `DirectAscii`   | direct-ASCII emitter                  | `write_char('\n')`      |
//! | `HostLocalized` | `write_char`, no pacing               | whole line via `write_line` |
//!
//! In `ScanCode` mode a character without a table entry never aborts the
//! payload; what happens to it is the engine's [`UnsupportedPolicy`].

use ghostkey_core::{
    lookup, HidKeyCode, InjectionMode, KeySpec, PacingConfig, TypingProfile, UnsupportedPolicy,
};
use tracing::{debug, trace};

use crate::application::{
    direct_ascii::DirectAsciiEmitter,
    hid_output::{Delay, HidOutput},
    raw_key::RawKeyEmitter,
};

/// What one `type_text` call handed to the HID output.
///
/// This is a local tally, not a delivery receipt: the host never confirms
/// that it registered anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeReport {
    /// Characters sent through the mode's emitter.
    pub emitted: usize,
    /// Characters dropped by [`UnsupportedPolicy::SkipUnsupported`].
    pub skipped: usize,
    /// Characters sent through the direct-ASCII emitter because the scan-code
    /// table had no entry ([`UnsupportedPolicy::DivertToDirectAscii`]).
    pub diverted: usize,
    /// Whether a trailing Enter was sent.
    pub enter_sent: bool,
}

/// The keystroke injection engine.
pub struct InjectionEngine<H, D> {
    output: H,
    delay: D,
    unsupported: UnsupportedPolicy,
}

impl<H: HidOutput, D: Delay> InjectionEngine<H, D> {
    /// Creates an engine that skips unsupported characters.
    pub fn new(output: H, delay: D) -> Self {
        Self {
            output,
            delay,
            unsupported: UnsupportedPolicy::default(),
        }
    }

    /// Sets the policy for characters the scan-code table cannot express.
    pub fn with_unsupported_policy(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }

    /// Policy for characters the scan-code table cannot express.
    pub fn unsupported_policy(&self) -> UnsupportedPolicy {
        self.unsupported
    }

    /// Types `payload` in order using `mode`, optionally followed by Enter.
    pub fn type_text(
        &mut self,
        payload: &str,
        mode: InjectionMode,
        pacing: &PacingConfig,
        append_enter: bool,
    ) -> TypeReport {
        debug!(%mode, chars = payload.chars().count(), append_enter, "typing payload");

        let report = match mode {
            InjectionMode::ScanCode => self.type_scan_codes(payload, pacing, append_enter),
            InjectionMode::DirectAscii => self.type_direct_ascii(payload, pacing, append_enter),
            InjectionMode::HostLocalized => self.type_host_localized(payload, pacing, append_enter),
        };

        if report.skipped > 0 {
            debug!(skipped = report.skipped, "unsupported characters were skipped");
        }
        report
    }

    /// Types `payload` as a command line (always followed by Enter) with a
    /// preset's mode and pacing.
    pub fn type_command(&mut self, payload: &str, profile: TypingProfile) -> TypeReport {
        self.type_text(payload, profile.mode(), &profile.pacing(), true)
    }

    /// Holds `keys` together and releases them in one batch.
    pub fn press_chord(&mut self, keys: &[HidKeyCode], pacing: &PacingConfig) {
        trace!(?keys, "pressing chord");
        RawKeyEmitter::new(&mut self.output, &mut self.delay, pacing).emit_chord(keys);
    }

    /// Blocks for `ms` milliseconds on the engine's delay source.
    pub fn wait(&mut self, ms: u32) {
        self.delay.pause(ms);
    }

    /// The HID output the engine types through.
    pub fn output(&self) -> &H {
        &self.output
    }

    /// Gives back the output and delay source.
    pub fn into_parts(self) -> (H, D) {
        (self.output, self.delay)
    }

    fn type_scan_codes(
        &mut self,
        payload: &str,
        pacing: &PacingConfig,
        append_enter: bool,
    ) -> TypeReport {
        let mut report = TypeReport::default();

        for c in payload.chars() {
            match lookup(c) {
                Some(spec) => {
                    RawKeyEmitter::new(&mut self.output, &mut self.delay, pacing).emit(spec);
                    report.emitted += 1;
                }
                None => match self.unsupported {
                    UnsupportedPolicy::SkipUnsupported => {
                        trace!(?c, "no scan code; skipping");
                        report.skipped += 1;
                    }
                    UnsupportedPolicy::DivertToDirectAscii => {
                        trace!(?c, "no scan code; diverting to direct ASCII");
                        DirectAsciiEmitter::new(&mut self.output, &mut self.delay, pacing).emit(c);
                        report.diverted += 1;
                    }
                },
            }
            self.delay.pause(pacing.inter_char_delay_ms);
        }

        if append_enter {
            RawKeyEmitter::new(&mut self.output, &mut self.delay, pacing).emit(KeySpec::ENTER);
            self.delay.pause(pacing.enter_settle_ms);
            report.enter_sent = true;
        }
        report
    }

    fn type_direct_ascii(
        &mut self,
        payload: &str,
        pacing: &PacingConfig,
        append_enter: bool,
    ) -> TypeReport {
        let mut report = TypeReport::default();

        for c in payload.chars() {
            DirectAsciiEmitter::new(&mut self.output, &mut self.delay, pacing).emit(c);
            report.emitted += 1;
            self.delay.pause(pacing.inter_char_delay_ms);
        }

        if append_enter {
            DirectAsciiEmitter::new(&mut self.output, &mut self.delay, pacing).emit('\n');
            self.delay.pause(pacing.enter_settle_ms);
            report.enter_sent = true;
        }
        report
    }

    fn type_host_localized(
        &mut self,
        payload: &str,
        pacing: &PacingConfig,
        append_enter: bool,
    ) -> TypeReport {
        let mut report = TypeReport {
            emitted: payload.chars().count(),
            ..TypeReport::default()
        };

        if append_enter {
            self.output.write_line(payload);
            self.delay.pause(pacing.enter_settle_ms);
            report.enter_sent = true;
        } else {
            for c in payload.chars() {
                self.output.write_char(c);
            }
        }
        report
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
