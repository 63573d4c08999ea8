//! # ghostkey-core
//!
//! Shared library for Ghostkey containing the scan-code translation table,
//! the USB HID boot keyboard report encoder, and the typing configuration
//! types (injection mode, pacing, unsupported-character policy).
//!
//! It has zero dependencies on OS APIs, device files, or timers, so every
//! part of it can be tested on any machine.
//!
//! # Architecture overview (for beginners)
//!
//! Ghostkey makes a small USB device pretend to be a keyboard and type text
//! into whatever computer it is plugged into.  A keyboard never sends
//! characters; it sends the *position* of the key that was pressed (a scan
//! code) and lets the host's layout decide which character that means.  By
//! always sending the positions a US keyboard would use, the injected text is
//! independent of any layout assumption on the device side.
//!
//! - **`keymap`** – HID Usage IDs, the character → scan-code table, and the
//!   8-byte report that carries held keys over the wire.
//!
//! - **`domain`** – The knobs that shape an injection: which emitter to use
//!   (`InjectionMode`), how long to hold and wait (`PacingConfig`), and what
//!   to do with characters the table cannot express (`UnsupportedPolicy`).

pub mod domain;
pub mod keymap;

pub use domain::mode::{InjectionMode, UnsupportedPolicy};
pub use domain::pacing::{PacingConfig, TypingProfile};
pub use keymap::hid::HidKeyCode;
pub use keymap::report::KeyboardReport;
pub use keymap::scan_table::{lookup, KeySpec, ScanCodeTable, SCAN_CODE_TABLE};
