//! Seams between the injection engine and the hardware.
//!
//! The engine depends on exactly four output primitives and one way to wait.
//! None of them can report failure: the USB HID keyboard channel is one-way,
//! so there is nothing the engine could do with an error except drop it.
//! Backends that *can* observe a local failure (a device file write, say)
//! log and count it themselves.

use ghostkey_core::HidKeyCode;

/// The keyboard half of a USB HID device.
///
/// The HID interface must have finished enumeration on the host before any
/// of these are called; keystrokes sent earlier are silently lost.
pub trait HidOutput {
    /// Adds `key` to the set of held keys and sends the new state.
    fn press_key(&mut self, key: HidKeyCode);

    /// Releases every held key and modifier in a single report.
    fn release_all_keys(&mut self);

    /// Sends `c` using the output's own character translation.
    fn write_char(&mut self, c: char);

    /// Sends `line` followed by Enter in one call.
    fn write_line(&mut self, line: &str);
}

/// A blocking wait.
pub trait Delay {
    /// Blocks for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);

    /// Blocks for `ms` milliseconds; a zero wait makes no call at all.
    fn pause(&mut self, ms: u32) {
        if ms > 0 {
            self.delay_ms(ms);
        }
    }
}

impl<T: HidOutput + ?Sized> HidOutput for &mut T {
    fn press_key(&mut self, key: HidKeyCode) {
        (**self).press_key(key);
    }

    fn release_all_keys(&mut self) {
        (**self).release_all_keys();
    }

    fn write_char(&mut self, c: char) {
        (**self).write_char(c);
    }

    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}
