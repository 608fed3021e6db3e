use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TransferClient {
    pub connect_timeout: Duration,
    /// Bounds the wait for the size reply and for each read of file data.
    pub handshake_timeout: Duration,
    pub max_frame_size: u32,
}
