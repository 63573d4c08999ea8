//! Key code tables for layout-independent typing.
//!
//! The canonical representation is USB HID Usage IDs (page 0x07, Keyboard/Keypad).
//! Characters are translated to HID positions once, at the edge of the engine,
//! and everything downstream only deals in positions.

pub mod hid;
pub mod report;
pub mod scan_table;

pub use hid::HidKeyCode;
pub use report::KeyboardReport;
pub use scan_table::{lookup, KeySpec, ScanCodeTable};
