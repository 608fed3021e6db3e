use std::sync::Arc;
use tokio::net::TcpListener;
use crate::tracker::structs::tracker_service::TrackerService;

#[derive(Debug)]
pub struct TrackerServer {
    pub listener: TcpListener,
    pub service: Arc<TrackerService>,
}
