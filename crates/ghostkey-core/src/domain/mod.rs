//! Domain types that shape an injection.
//!
//! Nothing in here performs I/O or waits; these are plain values that the
//! device crate reads when it drives the HID output.
//!
//! # Why are timings data? (for beginners)
//!
//! A keyboard that only *sends* has no way to learn whether the host saw a
//! key press.  The only lever for reliability is holding keys long enough
//! and leaving enough space between them, and the right amount differs per
//! host and driver.  Keeping every duration in [`pacing::PacingConfig`] lets
//! one build serve both a slow, careful profile and a fast one.

/// Emitter selection and unsupported-character policy.
pub mod mode;

/// Dwell and delay durations, plus the slow/fast typing presets.
pub mod pacing;
