//! HTTP adapter over the tracker.
//!
//! Every handler calls the same [`TrackerService`](crate::tracker::structs::tracker_service::TrackerService)
//! operations as the framed socket front-end and answers with the same
//! [`TrackerResponse`](crate::protocol::structs::tracker_response::TrackerResponse) JSON.
//!
//! # Endpoints Overview
//!
//! - `GET /api/peers` - Registered peers and their addresses
//! - `GET /api/files` - Every indexed filename
//! - `GET /api/search?keyword=<keyword>` - Filenames containing the keyword, with their hosters
//! - `GET /api/stats` - Tracker statistics
//! - `GET /api/events` - Server-sent stream of `peer_list_updated` and `file_list_updated`
//! - `POST /api/register` - Body `{"peer_id": .., "listen_port": ..}`; the host is the caller's IP
//! - `POST /api/share` - Body `{"peer_id": .., "filenames": [..], "replace": false}`
//! - `POST /api/heartbeat` - Body `{"peer_id": ..}`
//! - `POST /api/unregister` - Body `{"peer_id": ..}`

/// Data structures for the API handlers.
pub mod structs;

/// Server setup, routing and shared request helpers.
#[allow(clippy::module_inception)]
pub mod api;

/// Peer registration and listing endpoints.
pub mod api_peers;

/// File listing and search endpoints.
pub mod api_files;

/// Statistics endpoint.
pub mod api_stats;

/// Server-sent change notifications.
pub mod api_events;
