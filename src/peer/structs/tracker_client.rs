use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::Mutex;

#[derive(Debug)]
pub struct TrackerClient {
    pub tracker_address: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_frame_size: u32,
    /// Kept open between requests; dropped and reopened after any failure.
    pub connection: Mutex<Option<TcpStream>>,
}
