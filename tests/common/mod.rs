#![allow(dead_code)]
use rand::RngExt;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpStream;
use tokio::sync::watch;
use p2p_share::config::structs::configuration::Configuration;
use p2p_share::config::structs::peer_config::PeerConfig;
use p2p_share::protocol::protocol::{expect_message, write_message, DEFAULT_MAX_FRAME_SIZE};
use p2p_share::protocol::structs::tracker_response::TrackerResponse;
use p2p_share::tracker::structs::tracker_server::TrackerServer;
use p2p_share::tracker::structs::tracker_service::TrackerService;

pub struct TestTracker {
    pub service: Arc<TrackerService>,
    pub address: SocketAddr,
    pub shutdown: watch::Sender<bool>,
}

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.tracker.bind_address = "127.0.0.1:0".to_string();
    config
}

/// Starts a tracker socket server on an ephemeral port.
pub async fn start_tracker(config: Configuration) -> TestTracker {
    let service = Arc::new(TrackerService::new(Arc::new(config)));
    let server = TrackerServer::new(service.clone(), "127.0.0.1:0".parse().unwrap()).await.unwrap();
    let address = server.local_addr().unwrap();
    let (shutdown, rx) = watch::channel(false);
    tokio::spawn(async move {
        server.start(rx).await;
    });
    TestTracker { service, address, shutdown }
}

/// Share and download directories for one peer, under `root/<name>/`.
pub fn create_peer_config(tracker: SocketAddr, root: &TempDir, name: &str) -> PeerConfig {
    let share_directory = root.path().join(name).join("share");
    let download_directory = root.path().join(name).join("downloads");
    std::fs::create_dir_all(&share_directory).unwrap();
    std::fs::create_dir_all(&download_directory).unwrap();
    PeerConfig {
        peer_id: name.to_string(),
        tracker_address: tracker.to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        advertise_port: 0,
        share_directory: share_directory.to_string_lossy().to_string(),
        download_directory: download_directory.to_string_lossy().to_string(),
        share_extensions: vec![],
        heartbeat_interval: 3600,
        rescan_interval: 0,
        connect_timeout: 5,
        handshake_timeout: 5,
        max_frame_size: DEFAULT_MAX_FRAME_SIZE,
    }
}

pub async fn connect(address: SocketAddr) -> TcpStream {
    TcpStream::connect(address).await.unwrap()
}

/// One framed request and its response on an open connection.
pub async fn send_request(stream: &mut TcpStream, request: serde_json::Value) -> TrackerResponse {
    write_message(stream, &request).await.unwrap();
    expect_message::<TrackerResponse, _>(stream, DEFAULT_MAX_FRAME_SIZE).await.unwrap()
}

pub fn random_bytes(length: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..length).map(|_| rng.random::<u8>()).collect()
}

pub fn write_file(directory: &Path, filename: &str, contents: &[u8]) {
    std::fs::write(directory.join(filename), contents).unwrap();
}
