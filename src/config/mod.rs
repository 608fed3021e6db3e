//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the configuration from TOML
//! files. One file drives every role the binary can take: tracker, HTTP adapter and
//! peer.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **log_level / log_console_interval**: Logging and console statistics
//! - **tracker**: Tracker bind address, framing limit, staleness window and sweep interval
//! - **api_server**: HTTP adapter instances
//! - **peer**: Peer identity, tracker address, share/download directories and timeouts
//! - **sentry**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use p2p_share::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when missing
//! let config = Configuration::load_from_file("config.toml", true)?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
