//! Infrastructure layer for the device.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `ghostkey_core`, but MUST NOT be imported by the `application` layer
//! outside of tests.
//!
//! # Sub-modules
//!
//! - **`hid_output`** – Implementations of `HidOutput`: the Linux USB gadget
//!   backend that writes boot keyboard reports to `/dev/hidgN`, and a
//!   recording mock for tests.
//!
//! - **`delay`** – `ThreadDelay`, the blocking `Delay` used in production.
//!
//! - **`storage`** – TOML configuration (device path, mode, pacing).

pub mod delay;
pub mod hid_output;
pub mod storage;
