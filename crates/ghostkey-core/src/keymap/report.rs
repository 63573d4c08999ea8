//! USB HID boot-protocol keyboard input report.
//!
//! The boot report is the 8-byte layout every BIOS and OS keyboard driver
//! understands without parsing a report descriptor:
//!
//! ```text
//! byte 0     modifier bits (LeftCtrl = bit 0 … RightGUI = bit 7)
//! byte 1     reserved, always 0
//! bytes 2–7  up to six held (non-modifier) key usage IDs, 0 = empty slot
//! ```
//!
//! A report describes the *complete* set of keys currently held.  Releasing
//! everything is therefore a single all-zero report, which is why the engine
//! always releases a keystroke in one batch.

use crate::keymap::hid::HidKeyCode;

/// Length of an encoded boot keyboard report in bytes.
pub const REPORT_LEN: usize = 8;

/// Number of simultaneous non-modifier keys a boot report can carry.
pub const ROLLOVER: usize = 6;

/// The set of keys held at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardReport {
    /// Modifier bitmap (byte 0).
    pub modifiers: u8,
    /// Held key slots (bytes 2–7); `0` marks an empty slot.
    pub keys: [u8; ROLLOVER],
}

impl KeyboardReport {
    /// An empty report (nothing held).
    pub const fn new() -> Self {
        Self {
            modifiers: 0,
            keys: [0; ROLLOVER],
        }
    }

    /// Adds `key` to the held set.
    ///
    /// Returns `false` when all six slots are taken (the key is not added)
    /// or when `key` is [`HidKeyCode::Unknown`].  Pressing a key that is
    /// already held leaves the report unchanged and returns `true`.
    pub fn press(&mut self, key: HidKeyCode) -> bool {
        if let Some(bit) = key.modifier_bit() {
            self.modifiers |= bit;
            return true;
        }
        let code = key.as_u8();
        if code == 0 {
            return false;
        }
        if self.keys.contains(&code) {
            return true;
        }
        match self.keys.iter_mut().find(|slot| **slot == 0) {
            Some(slot) => {
                *slot = code;
                true
            }
            None => false,
        }
    }

    /// Drops every held key and modifier.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns `true` if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.modifiers == 0 && self.keys.iter().all(|&k| k == 0)
    }

    /// Encodes the report in wire order.
    pub fn to_bytes(&self) -> [u8; REPORT_LEN] {
        let mut bytes = [0u8; REPORT_LEN];
        bytes[0] = self.modifiers;
        bytes[2..].copy_from_slice(&self.keys);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_encodes_to_all_zero_bytes() {
        assert_eq!(KeyboardReport::new().to_bytes(), [0u8; REPORT_LEN]);
        assert!(KeyboardReport::default().is_empty());
    }

    #[test]
    fn test_shift_and_key_are_encoded_in_separate_fields() {
        // Arrange
        let mut report = KeyboardReport::new();

        // Act
        assert!(report.press(HidKeyCode::ShiftLeft));
        assert!(report.press(HidKeyCode::Digit1));

        // Assert – '!' on the wire: shift bit + Digit1 in the first slot
        assert_eq!(report.to_bytes(), [0x02, 0, 0x1E, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_pressing_held_key_again_does_not_duplicate_slot() {
        let mut report = KeyboardReport::new();
        report.press(HidKeyCode::KeyA);
        report.press(HidKeyCode::KeyA);
        assert_eq!(report.keys, [0x04, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_seventh_key_is_rejected_on_rollover_overflow() {
        // Arrange
        let mut report = KeyboardReport::new();
        let keys = [
            HidKeyCode::KeyA,
            HidKeyCode::KeyB,
            HidKeyCode::KeyC,
            HidKeyCode::KeyD,
            HidKeyCode::KeyE,
            HidKeyCode::KeyF,
        ];
        for key in keys {
            assert!(report.press(key));
        }

        // Act
        let accepted = report.press(HidKeyCode::KeyG);

        // Assert
        assert!(!accepted);
        assert!(!report.keys.contains(&HidKeyCode::KeyG.as_u8()));
        // Modifiers still fit: they do not use slots.
        assert!(report.press(HidKeyCode::ControlLeft));
    }

    #[test]
    fn test_unknown_key_is_never_added() {
        let mut report = KeyboardReport::new();
        assert!(!report.press(HidKeyCode::Unknown));
        assert!(report.is_empty());
    }

    #[test]
    fn test_clear_releases_keys_and_modifiers() {
        let mut report = KeyboardReport::new();
        report.press(HidKeyCode::MetaLeft);
        report.press(HidKeyCode::KeyR);

        report.clear();

        assert!(report.is_empty());
        assert_eq!(report.to_bytes(), [0u8; REPORT_LEN]);
    }
}
