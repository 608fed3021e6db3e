//! Configuration enumerations.

/// Errors raised while loading, saving or validating a configuration file.
pub mod configuration_error;
