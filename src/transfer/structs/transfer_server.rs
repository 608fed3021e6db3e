use std::time::Duration;
use tokio::net::TcpListener;
use crate::peer::types::shared_share_set::SharedShareSet;

#[derive(Debug)]
pub struct TransferServer {
    pub listener: TcpListener,
    pub shares: SharedShareSet,
    pub max_frame_size: u32,
    pub handshake_timeout: Duration,
}
