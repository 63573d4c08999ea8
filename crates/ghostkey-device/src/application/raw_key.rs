//! Raw key emitter: one timed scan-code keystroke.
//!
//! The sequence is fixed because host HID stacks are timing-sensitive:
//!
//! ```text
//! [press Shift, wait shift_lead]   only when the key needs Shift
//!  press key
//!  wait key_dwell                  Shift and key held together
//!  release all                     one batched report, never per-key
//!  wait post_release               keeps the host from seeing key-repeat
//! ```
//!
//! Releasing Shift and the key separately risks the host seeing the key
//! unshifted for one report, so releases are always batched.

use ghostkey_core::{HidKeyCode, KeySpec, PacingConfig};

use crate::application::hid_output::{Delay, HidOutput};

/// Drives single keystrokes against a borrowed output.
pub struct RawKeyEmitter<'a, H: ?Sized, D: ?Sized> {
    output: &'a mut H,
    delay: &'a mut D,
    pacing: &'a PacingConfig,
}

impl<'a, H, D> RawKeyEmitter<'a, H, D>
where
    H: HidOutput + ?Sized,
    D: Delay + ?Sized,
{
    pub fn new(output: &'a mut H, delay: &'a mut D, pacing: &'a PacingConfig) -> Self {
        Self {
            output,
            delay,
            pacing,
        }
    }

    /// Types `spec` with the full press / hold / release-all protocol.
    pub fn emit(&mut self, spec: KeySpec) {
        if spec.needs_shift {
            self.output.press_key(HidKeyCode::ShiftLeft);
            self.delay.pause(self.pacing.shift_lead_ms);
        }
        self.output.press_key(spec.keycode);
        self.delay.pause(self.pacing.key_dwell_ms);
        self.output.release_all_keys();
        self.delay.pause(self.pacing.post_release_ms);
    }

    /// Holds every key in `keys` together, in order, then releases them in
    /// one batch.  Used for shortcuts such as Meta+R.
    pub fn emit_chord(&mut self, keys: &[HidKeyCode]) {
        if keys.is_empty() {
            return;
        }
        for &key in keys {
            self.output.press_key(key);
        }
        self.delay.pause(self.pacing.key_dwell_ms);
        self.output.release_all_keys();
        self.delay.pause(self.pacing.post_release_ms);
    }
}
