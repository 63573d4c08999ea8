//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module reads the TOML configuration from an explicit path
//! or the platform config directory and falls back to defaults when no file
//! exists yet.

pub mod config;
