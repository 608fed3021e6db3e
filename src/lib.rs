//! # P2P-Share
//!
//! A small peer-to-peer file sharing network built on Tokio.
//!
//! ## Overview
//!
//! A central tracker keeps a live, in-memory directory of the peers taking part in the
//! network and the filenames each of them offers. Peers register with the tracker,
//! advertise the files in their share directory, search the index, and then pull files
//! directly from each other over a small handshake protocol. A peer that finishes a
//! download advertises the file again, becoming a new source for it.
//!
//! ## Features
//!
//! - **Framed protocol**: every control message is a length-prefixed JSON frame, so large
//!   search results and share lists are never truncated
//! - **Concurrent registry**: a single synchronised store maps peers to addresses and
//!   filenames to hosting peers, with atomic upsert/remove/share/search operations
//! - **Liveness sweep**: peers that stop sending heartbeats are expired after a
//!   configurable staleness window
//! - **Change notifications**: peer and file list updates are fanned out to observers
//!   without ever blocking the mutation that caused them
//! - **Direct transfers**: size negotiation, explicit acknowledgment and streamed bytes
//!   with short-transfer detection
//! - **HTTP adapter**: JSON routes and a server-sent event stream over the same tracker
//!   operations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use p2p_share::config::structs::configuration::Configuration;
//! use p2p_share::tracker::structs::tracker_service::TrackerService;
//! use p2p_share::tracker::structs::tracker_server::TrackerServer;
//!
//! let config = Arc::new(Configuration::init());
//! let service = Arc::new(TrackerService::new(config.clone()));
//! let server = TrackerServer::new(service.clone(), "127.0.0.1:5000".parse()?).await?;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - HTTP routes and event stream over the tracker service
//! - [`common`] - Logging setup, shutdown helpers and filename checks
//! - [`config`] - Configuration management and TOML parsing
//! - [`peer`] - Peer session, local share set and tracker client
//! - [`protocol`] - Frame codec and message types
//! - [`registry`] - Concurrency-safe peer and file index
//! - [`stats`] - Tracker statistics counters
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Tracker service, socket server, liveness sweep and notifications
//! - [`transfer`] - Peer-to-peer transfer server and client

/// HTTP adapter module.
///
/// Exposes the tracker operations as JSON routes and streams change notifications
/// as server-sent events. Carries no logic of its own.
pub mod api;

/// Common utilities and shared functionality.
///
/// Contains logging setup, listener construction, shutdown waiting and
/// filename / peer id validation used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Peer session module.
///
/// Owns the per-process peer state: identity, the local share set, the last search
/// result, and the tracker and transfer clients.
pub mod peer;

/// Message protocol module.
///
/// Length-prefixed framing and the request/response types used on tracker and
/// transfer connections.
pub mod protocol;

/// Registry store module.
///
/// The in-memory peer map and file index, guarded by a single lock.
pub mod registry;

/// Statistics tracking module.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Tracker service module.
///
/// Decodes requests, applies them to the registry, encodes responses and fans out
/// change notifications. Also contains the TCP front-end and the liveness sweep.
pub mod tracker;

/// Peer transfer module.
///
/// The per-peer server that streams shared files and the client that pulls them.
pub mod transfer;
