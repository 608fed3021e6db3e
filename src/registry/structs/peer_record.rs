use std::time::Instant;
use crate::protocol::structs::peer_address::PeerAddress;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerRecord {
    pub peer_id: String,
    /// Where the peer's transfer server listens.
    pub address: PeerAddress,
    pub registered: Instant,
    /// Last register, share or heartbeat; the liveness sweep compares against this.
    pub updated: Instant,
}
