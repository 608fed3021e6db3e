//! Implementation blocks for configuration types.

/// Loading, saving, defaults and validation for `Configuration`.
pub mod configuration;
