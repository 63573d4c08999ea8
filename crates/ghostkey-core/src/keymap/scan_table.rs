//! Character → scan-code translation for the US reference layout.
//!
//! [`SCAN_CODE_TABLE`] answers one question: which physical key (and whether
//! Shift must be held) produces a given character on a US keyboard.  The table
//! is a `static` built at compile time by a `const fn`; there is no way to
//! mutate it after the program starts.
//!
//! # Coverage
//!
//! | Characters                     | Keys                         | Shift |
//! |--------------------------------|------------------------------|-------|
//! | `a`–`z`                        | `KeyA`–`KeyZ` (0x04–0x1D)    | no    |
//! | `A`–`Z`                        | same 26 keys                 | yes   |
//! | `1`–`9`, `0`                   | `Digit1`–`Digit0` (0x1E–0x27)| no    |
//! | `!@#$%^&*()`                   | digit row                    | yes   |
//! | `` -=[]\;',./` `` and space    | punctuation keys             | no    |
//! | `` _+{}|:"<>?~ ``              | same punctuation keys        | yes   |
//!
//! Anything else (control characters, tab, newline, every non-ASCII
//! character) has no entry.  The engine skips such characters rather than
//! guessing; see `UnsupportedPolicy`.

use crate::keymap::hid::HidKeyCode;

/// One keystroke on the reference layout: a key position plus the Shift state
/// it must be pressed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    /// The primary key to assert.
    pub keycode: HidKeyCode,
    /// Whether Shift must be held while `keycode` is asserted.
    pub needs_shift: bool,
}

impl KeySpec {
    /// The Enter keystroke that submits a command line.
    pub const ENTER: KeySpec = KeySpec::plain(HidKeyCode::Enter);

    /// A keystroke without Shift.
    pub const fn plain(keycode: HidKeyCode) -> Self {
        Self {
            keycode,
            needs_shift: false,
        }
    }

    /// A keystroke with Shift held.
    pub const fn shifted(keycode: HidKeyCode) -> Self {
        Self {
            keycode,
            needs_shift: true,
        }
    }
}

const LETTER_KEYS: [HidKeyCode; 26] = [
    HidKeyCode::KeyA,
    HidKeyCode::KeyB,
    HidKeyCode::KeyC,
    HidKeyCode::KeyD,
    HidKeyCode::KeyE,
    HidKeyCode::KeyF,
    HidKeyCode::KeyG,
    HidKeyCode::KeyH,
    HidKeyCode::KeyI,
    HidKeyCode::KeyJ,
    HidKeyCode::KeyK,
    HidKeyCode::KeyL,
    HidKeyCode::KeyM,
    HidKeyCode::KeyN,
    HidKeyCode::KeyO,
    HidKeyCode::KeyP,
    HidKeyCode::KeyQ,
    HidKeyCode::KeyR,
    HidKeyCode::KeyS,
    HidKeyCode::KeyT,
    HidKeyCode::KeyU,
    HidKeyCode::KeyV,
    HidKeyCode::KeyW,
    HidKeyCode::KeyX,
    HidKeyCode::KeyY,
    HidKeyCode::KeyZ,
];

/// No shifted companion.
const NO_COMPANION: u8 = 0;

/// `(unshifted, shifted companion, key)` for the digit row and punctuation.
const SYMBOL_KEYS: [(u8, u8, HidKeyCode); 22] = [
    (b'1', b'!', HidKeyCode::Digit1),
    (b'2', b'@', HidKeyCode::Digit2),
    (b'3', b'#', HidKeyCode::Digit3),
    (b'4', b'$', HidKeyCode::Digit4),
    (b'5', b'%', HidKeyCode::Digit5),
    (b'6', b'^', HidKeyCode::Digit6),
    (b'7', b'&', HidKeyCode::Digit7),
    (b'8', b'*', HidKeyCode::Digit8),
    (b'9', b'(', HidKeyCode::Digit9),
    (b'0', b')', HidKeyCode::Digit0),
    (b' ', NO_COMPANION, HidKeyCode::Space),
    (b'-', b'_', HidKeyCode::Minus),
    (b'=', b'+', HidKeyCode::Equal),
    (b'[', b'{', HidKeyCode::BracketLeft),
    (b']', b'}', HidKeyCode::BracketRight),
    (b'\\', b'|', HidKeyCode::Backslash),
    (b';', b':', HidKeyCode::Semicolon),
    (b'\'', b'"', HidKeyCode::Quote),
    (b'`', b'~', HidKeyCode::Backquote),
    (b',', b'<', HidKeyCode::Comma),
    (b'.', b'>', HidKeyCode::Period),
    (b'/', b'?', HidKeyCode::Slash),
];

/// Lookup table indexed by ASCII code.
#[derive(Debug)]
pub struct ScanCodeTable {
    entries: [Option<KeySpec>; 128],
}

impl ScanCodeTable {
    /// Builds the US reference-layout table.
    pub const fn us() -> Self {
        let mut entries: [Option<KeySpec>; 128] = [None; 128];

        let mut i = 0;
        while i < LETTER_KEYS.len() {
            entries[(b'a' + i as u8) as usize] = Some(KeySpec::plain(LETTER_KEYS[i]));
            entries[(b'A' + i as u8) as usize] = Some(KeySpec::shifted(LETTER_KEYS[i]));
            i += 1;
        }

        let mut i = 0;
        while i < SYMBOL_KEYS.len() {
            let (plain, companion, key) = SYMBOL_KEYS[i];
            entries[plain as usize] = Some(KeySpec::plain(key));
            if companion != NO_COMPANION {
                entries[companion as usize] = Some(KeySpec::shifted(key));
            }
            i += 1;
        }

        Self { entries }
    }

    /// Returns the keystroke that types `c`, or `None` if `c` is unsupported.
    pub fn lookup(&self, c: char) -> Option<KeySpec> {
        if c.is_ascii() {
            self.entries[c as usize]
        } else {
            None
        }
    }

    /// Returns `true` if `c` has an entry.
    pub fn supports(&self, c: char) -> bool {
        self.lookup(c).is_some()
    }

    /// Yields the characters of `text` that have no entry, in order.
    pub fn unsupported_chars<'a>(&'a self, text: &'a str) -> impl Iterator<Item = char> + 'a {
        text.chars().filter(move |&c| !self.supports(c))
    }

    /// Number of characters with an entry.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Always `false`; the table is never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The process-wide US reference-layout table.
pub static SCAN_CODE_TABLE: ScanCodeTable = ScanCodeTable::us();

/// Looks `c` up in [`SCAN_CODE_TABLE`].
pub fn lookup(c: char) -> Option<KeySpec> {
    SCAN_CODE_TABLE.lookup(c)
}
