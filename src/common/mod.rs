//! Common utilities and shared functionality.
//!
//! This module contains helper functions used across all other modules.
//!
//! # Utilities
//!
//! - Logging setup
//! - TCP listener construction
//! - Graceful shutdown waiting
//! - Filename and peer id validation
//! - Peer id generation
//!
//! # Example
//!
//! ```rust,ignore
//! use p2p_share::common::common::{generate_peer_id, is_safe_filename};
//!
//! let peer_id = generate_peer_id();
//! assert!(is_safe_filename("song1.mp3"));
//! assert!(!is_safe_filename("../etc/passwd"));
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
