use std::time::{Duration, Instant};
use crate::protocol::structs::peer_address::PeerAddress;
use crate::registry::structs::peer_record::PeerRecord;

impl PeerRecord {
    pub fn new(peer_id: &str, address: PeerAddress, now: Instant) -> PeerRecord {
        PeerRecord {
            peer_id: peer_id.to_string(),
            address,
            registered: now,
            updated: now,
        }
    }

    pub fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.updated)
    }
}
