/// Files this peer can serve.
pub mod local_share_set;

/// Framed connection to the tracker.
pub mod tracker_client;

/// Per-process peer state.
pub mod peer_session;
