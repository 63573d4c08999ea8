//! ghostkey-device library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does ghostkey-device do? (for beginners)
//!
//! The device side turns a string into keystrokes on a host computer:
//!
//! 1. Each character is looked up in the US reference scan-code table
//!    (`ghostkey_core::lookup`).
//! 2. The raw key emitter presses Shift (if needed), presses the key, holds
//!    both, releases everything at once, and waits.  Those waits are the only
//!    reliability mechanism there is: the host never acknowledges a key.
//! 3. The injection engine walks the payload, applies the gap between
//!    characters, and optionally finishes with Enter.
//! 4. A [`HidOutput`](application::hid_output::HidOutput) implementation turns
//!    "press" and "release all" into USB HID reports; on Linux that is the
//!    gadget device `/dev/hidg0`.

/// Application layer: emitters, the injection engine, and command macros.
pub mod application;

/// Infrastructure layer: HID output backends, delays, and config storage.
pub mod infrastructure;
