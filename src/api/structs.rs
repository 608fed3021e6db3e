//! Data structures for the API module.

/// Shared data context for API request handlers.
pub mod api_service_data;

/// `?keyword=` query of the search endpoint.
pub mod query_keyword;

/// JSON body of `POST /api/register`.
pub mod register_body;

/// JSON body of the endpoints that only name a peer.
pub mod peer_id_body;

/// JSON body of `POST /api/share`.
pub mod share_body;
