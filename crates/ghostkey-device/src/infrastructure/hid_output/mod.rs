//! `HidOutput` implementations.

pub mod gadget;
pub mod mock;

pub use gadget::{HidError, HidGadgetOutput};
pub use mock::{HidEvent, MockDelay, MockHidOutput};
