use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub bind_address: String,
    /// Largest accepted frame payload, in bytes.
    pub max_frame_size: u32,
    /// Seconds a control connection may stay idle before it is closed.
    pub connection_timeout: u64,
    /// Staleness window in seconds: peers without a refreshing request for this long are expired.
    pub peers_timeout: u64,
    pub peers_cleanup_interval: u64,
    /// Buffered change notifications per observer before the slowest one starts missing events.
    pub event_capacity: usize,
}
