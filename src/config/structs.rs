//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// HTTP adapter server configuration (address, timeouts, workers).
pub mod api_server_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Peer node settings (identity, directories, intervals, timeouts).
pub mod peer_config;

/// Sentry error reporting configuration.
pub mod sentry_config;

/// Tracker settings (bind address, framing, liveness).
pub mod tracker_config;
