use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PeerConfig {
    /// Empty means a random id is generated at startup.
    pub peer_id: String,
    pub tracker_address: String,
    /// Address the transfer server listens on.
    pub bind_address: String,
    /// Port announced to the tracker; 0 announces the port actually bound.
    pub advertise_port: u16,
    pub share_directory: String,
    pub download_directory: String,
    /// Lowercase extensions without the dot; empty shares every regular file.
    pub share_extensions: Vec<String>,
    pub heartbeat_interval: u64,
    /// Seconds between share directory rescans; 0 disables rescanning.
    pub rescan_interval: u64,
    pub connect_timeout: u64,
    pub handshake_timeout: u64,
    pub max_frame_size: u32,
}
