//! Direct-ASCII emitter: the layout-dependent fallback.
//!
//! Hands the character to the HID output's own text primitive and lets it
//! pick the key.  Whether the host then shows the intended character depends
//! on the host layout, which is exactly what scan-code mode avoids.  The
//! engine only uses this path when asked to.

use ghostkey_core::PacingConfig;

use crate::application::hid_output::{Delay, HidOutput};

/// Sends single characters through the output's own text primitive.
pub struct DirectAsciiEmitter<'a, H: ?Sized, D: ?Sized> {
    output: &'a mut H,
    delay: &'a mut D,
    pacing: &'a PacingConfig,
}

impl<'a, H, D> DirectAsciiEmitter<'a, H, D>
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

    /// Sends `c`, then waits `post_release_ms` so back-to-back identical
    /// characters are not merged into a repeat.
    pub fn emit(&mut self, c: char) {
        self.output.write_char(c);
        self.delay.pause(self.pacing.post_release_ms);
    }
}
