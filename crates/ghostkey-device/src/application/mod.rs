//! Application layer for the device.
//!
//! # What lives here?
//!
//! - **`hid_output`** – The two seams to the outside world: [`HidOutput`]
//!   (press / release all / write char / write line) and [`Delay`].  The
//!   infrastructure layer provides the implementations.
//!
//! - **`raw_key`** and **`direct_ascii`** – The two emitters.  One drives a
//!   full timed scan-code keystroke; the other hands a character to the HID
//!   output's own text primitive.
//!
//! - **`inject`** – The [`InjectionEngine`](inject::InjectionEngine): iterates
//!   a payload and picks the emitter by mode.
//!
//! - **`macros`** – Host idioms (open the run dialog, open a shell) built on
//!   top of the engine.
//!
//! [`HidOutput`]: hid_output::HidOutput
//! [`Delay`]: hid_output::Delay

pub mod direct_ascii;
pub mod hid_output;
pub mod inject;
pub mod macros;
pub mod raw_key;
