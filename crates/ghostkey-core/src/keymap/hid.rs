//! USB HID Usage IDs (page 0x07, Keyboard/Keypad page).
//!
//! Only the keys Ghostkey ever asserts are modelled: the typing block
//! (letters, digits, punctuation, Enter, Tab, Backspace), F4 for Alt+F4, and
//! the eight modifiers.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # Positions, not characters (for beginners)
//!
//! HID codes name **physical key positions**.  `KeyA` (0x04) is the key in the
//! position where a US keyboard prints "A"; on a French AZERTY host the same
//! code produces "q".  Ghostkey targets the US reference layout, so the host
//! must be configured with a layout whose positions agree for the characters
//! being typed, but the *device* never needs to know which layout that is.
//!
//! Modifiers (0xE0–0xE7) are special: in the boot keyboard report they are not
//! sent as key slots but as bits of the first report byte.  See
//! [`HidKeyCode::modifier_bit`].

/// USB HID Usage ID for keyboard keys (page 0x07).
///
/// The numeric value of each variant is its HID Usage ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HidKeyCode {
    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27). Zero sits after nine, as on the physical row.
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Control and punctuation keys (HID 0x28–0x38)
    Enter = 0x28,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,

    F4 = 0x3D,

    // Modifier keys (HID 0xE0–0xE7)
    ControlLeft = 0xE0,
    ShiftLeft = 0xE1,
    AltLeft = 0xE2,
    MetaLeft = 0xE3,
    ControlRight = 0xE4,
    ShiftRight = 0xE5,
    AltRight = 0xE6,
    MetaRight = 0xE7,

    /// Reserved usage 0x00; never added to a report.
    Unknown = 0x00,
}

impl HidKeyCode {
    /// Returns the raw USB HID Usage ID value for this key code.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` if this is a modifier key.
    pub const fn is_modifier(self) -> bool {
        matches!(self.as_u8(), 0xE0..=0xE7)
    }

    /// Bit of the report modifier byte that represents this key, or `None`
    /// for non-modifier keys.
    ///
    /// The boot protocol orders the bits exactly like the usage IDs:
    /// LeftCtrl is bit 0, RightGUI is bit 7.
    pub const fn modifier_bit(self) -> Option<u8> {
        if self.is_modifier() {
            Some(1 << (self.as_u8() - 0xE0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_keys_carry_their_usage_ids() {
        // Arrange / Act / Assert
        assert_eq!(HidKeyCode::Enter.as_u8(), 0x28);
        assert_eq!(HidKeyCode::Backspace.as_u8(), 0x2A);
        assert_eq!(HidKeyCode::Tab.as_u8(), 0x2B);
        assert_eq!(HidKeyCode::F4.as_u8(), 0x3D);
        assert_eq!(HidKeyCode::Unknown.as_u8(), 0x00);
    }

    #[test]
    fn test_modifier_bits_follow_usage_order() {
        assert_eq!(HidKeyCode::ControlLeft.modifier_bit(), Some(0x01));
        assert_eq!(HidKeyCode::ShiftLeft.modifier_bit(), Some(0x02));
        assert_eq!(HidKeyCode::AltLeft.modifier_bit(), Some(0x04));
        assert_eq!(HidKeyCode::MetaLeft.modifier_bit(), Some(0x08));
        assert_eq!(HidKeyCode::MetaRight.modifier_bit(), Some(0x80));
    }

    #[test]
    fn test_non_modifier_keys_have_no_modifier_bit() {
        for key in [
            HidKeyCode::KeyA,
            HidKeyCode::Enter,
            HidKeyCode::F4,
            HidKeyCode::Space,
            HidKeyCode::Unknown,
        ] {
            assert!(!key.is_modifier(), "{key:?} should NOT be a modifier key");
            assert_eq!(key.modifier_bit(), None);
        }
    }

    #[test]
    fn test_letter_and_digit_blocks_are_contiguous() {
        assert_eq!(HidKeyCode::KeyZ.as_u8() - HidKeyCode::KeyA.as_u8(), 25);
        assert_eq!(HidKeyCode::Digit9.as_u8() - HidKeyCode::Digit1.as_u8(), 8);
        assert_eq!(HidKeyCode::Digit0.as_u8(), HidKeyCode::Digit9.as_u8() + 1);
    }
}
