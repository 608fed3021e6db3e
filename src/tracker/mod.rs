//! Tracker service.
//!
//! The tracker is the single owner of the [`Registry`](crate::registry::structs::registry::Registry).
//! Both front-ends, the framed TCP server in this module and the HTTP adapter in
//! [`api`](crate::api), call the same `TrackerService` operations.
//!
//! # Main Components
//!
//! - `TrackerService` - request dispatch, registry mutation, change notifications
//! - `TrackerServer` - TCP listener with one task per connection
//! - `TrackerEvent` - `peer_list_updated` / `file_list_updated` notifications
//!
//! # Departure
//!
//! A peer leaves the registry when it sends `unregister`, or when the liveness sweep
//! finds it idle for longer than `peers_timeout`. Closing a control connection has no
//! effect on registration.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use p2p_share::config::structs::configuration::Configuration;
//! use p2p_share::tracker::structs::tracker_service::TrackerService;
//! use p2p_share::tracker::structs::tracker_server::TrackerServer;
//!
//! let config = Arc::new(Configuration::init());
//! let service = Arc::new(TrackerService::new(config.clone()));
//! let server = TrackerServer::new(service.clone(), "0.0.0.0:5000".parse()?).await?;
//! let (tx, rx) = tokio::sync::watch::channel(false);
//! tokio::spawn(async move { server.start(rx).await });
//! ```

/// Change notification enumeration.
pub mod enums;

/// Implementation blocks for the tracker service, server and sweep.
pub mod impls;

/// Tracker service and server structures.
pub mod structs;
