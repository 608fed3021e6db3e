pub mod local_share_set;
pub mod tracker_client;
pub mod peer_session;
