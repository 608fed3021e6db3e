pub mod registry;
pub mod peer_record;
