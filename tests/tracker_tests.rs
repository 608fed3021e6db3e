mod common;

use std::time::Duration;
use serde_json::json;
use tokio::io::AsyncWriteExt;
use p2p_share::protocol::enums::response_status::ResponseStatus;
use p2p_share::protocol::protocol::{expect_message, read_frame, write_frame, DEFAULT_MAX_FRAME_SIZE};
use p2p_share::protocol::structs::peer_address::PeerAddress;
use p2p_share::protocol::structs::tracker_response::TrackerResponse;

#[tokio::test]
async fn test_requests_on_a_reused_connection() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    let mut stream = common::connect(tracker.address).await;

    let response = common::send_request(&mut stream, json!({"command": "register", "peer_id": "alice", "listen_port": 6001})).await;
    assert!(response.is_success(), "Register should succeed");

    let response = common::send_request(&mut stream, json!({"command": "share", "peer_id": "alice", "filenames": ["Song1.mp3", "talk.wav"]})).await;
    assert_eq!(response.message_or_default(), "Shared 2 files");

    let response = common::send_request(&mut stream, json!({"command": "search", "keyword": "SONG"})).await;
    let results = response.results.unwrap();
    assert_eq!(results.len(), 1, "Search should be case-insensitive substring match");
    assert_eq!(results["Song1.mp3"], vec![PeerAddress::new("127.0.0.1".parse().unwrap(), 6001)]);
}

#[tokio::test]
async fn test_one_request_per_connection() {
    let tracker = common::start_tracker(common::create_test_config()).await;

    let mut stream = common::connect(tracker.address).await;
    common::send_request(&mut stream, json!({"command": "register", "peer_id": "bob", "peer_port": 6002})).await;
    drop(stream);

    let mut stream = common::connect(tracker.address).await;
    common::send_request(&mut stream, json!({"command": "share", "peer_id": "bob", "files": ["a.flac"]})).await;
    drop(stream);

    let mut stream = common::connect(tracker.address).await;
    let response = common::send_request(&mut stream, json!({"command": "list_files"})).await;
    assert_eq!(response.files.unwrap(), vec!["a.flac".to_string()]);
}

#[tokio::test]
async fn test_bad_requests_keep_the_connection_open() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    let mut stream = common::connect(tracker.address).await;

    let response = common::send_request(&mut stream, json!({"command": "explode"})).await;
    assert_eq!(response.status, ResponseStatus::Error);
    assert_eq!(response.message_or_default(), "unknown command: explode");

    write_frame(&mut stream, b"this is not json").await.unwrap();
    let response: TrackerResponse = expect_message(&mut stream, DEFAULT_MAX_FRAME_SIZE).await.unwrap();
    assert_eq!(response.status, ResponseStatus::Error);

    let response = common::send_request(&mut stream, json!({"command": "list_peers"})).await;
    assert!(response.is_success(), "Connection should still serve requests");
    assert_eq!(tracker.service.get_stats().bad_requests, 2);
}

#[tokio::test]
async fn test_oversized_frame_gets_error_then_close() {
    let mut config = common::create_test_config();
    config.tracker.max_frame_size = 1024;
    let tracker = common::start_tracker(config).await;
    let mut stream = common::connect(tracker.address).await;

    stream.write_u32(4096).await.unwrap();
    let response: TrackerResponse = expect_message(&mut stream, DEFAULT_MAX_FRAME_SIZE).await.unwrap();
    assert_eq!(response.status, ResponseStatus::Error);
    assert!(read_frame(&mut stream, DEFAULT_MAX_FRAME_SIZE).await.unwrap().is_none(), "Tracker should close the connection");
}

#[tokio::test]
async fn test_large_share_list_is_not_truncated() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    let mut stream = common::connect(tracker.address).await;
    common::send_request(&mut stream, json!({"command": "register", "peer_id": "carol", "listen_port": 6003})).await;

    let filenames: Vec<String> = (0..5000).map(|index| format!("recording-with-a-long-descriptive-name-{index:05}.wav")).collect();
    let response = common::send_request(&mut stream, json!({"command": "share", "peer_id": "carol", "filenames": filenames})).await;
    assert!(response.is_success());

    let response = common::send_request(&mut stream, json!({"command": "search", "keyword": "recording"})).await;
    assert_eq!(response.results.unwrap().len(), 5000);
}

#[tokio::test]
async fn test_stale_peer_is_swept_and_must_register_again() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    let mut stream = common::connect(tracker.address).await;
    common::send_request(&mut stream, json!({"command": "register", "peer_id": "dave", "listen_port": 6004})).await;
    common::send_request(&mut stream, json!({"command": "share", "peer_id": "dave", "filenames": ["gone.mp3"]})).await;

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(tracker.service.sweep(Duration::from_millis(30)), vec!["dave".to_string()]);

    let response = common::send_request(&mut stream, json!({"command": "search", "keyword": "gone"})).await;
    assert!(response.results.unwrap().is_empty(), "Expired peer's files should vanish");

    let response = common::send_request(&mut stream, json!({"command": "heartbeat", "peer_id": "dave"})).await;
    assert_eq!(response.message_or_default(), "peer not registered");
}

#[tokio::test]
async fn test_concurrent_clients() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    let mut tasks = Vec::new();
    for index in 0..20u16 {
        let address = tracker.address;
        tasks.push(tokio::spawn(async move {
            let mut stream = common::connect(address).await;
            let peer_id = format!("peer{index}");
            common::send_request(&mut stream, json!({"command": "register", "peer_id": peer_id, "listen_port": 7000 + index})).await;
            common::send_request(&mut stream, json!({"command": "share", "peer_id": peer_id, "filenames": [format!("file{index}.mp3"), "common.mp3"]})).await
        }));
    }
    for task in tasks {
        assert!(task.await.unwrap().is_success());
    }

    assert_eq!(tracker.service.registry.peers_count(), 20);
    assert_eq!(tracker.service.registry.files_count(), 21);
    assert_eq!(tracker.service.registry.hosters("common.mp3").len(), 20);
    assert!(tracker.service.registry.is_consistent());
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    tracker.shutdown.send(true).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(tokio::net::TcpStream::connect(tracker.address).await.is_err(), "Listener should be closed after shutdown");
}
