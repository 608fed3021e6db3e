pub mod peer_address;
pub mod tracker_response;
