mod common;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use p2p_share::peer::errors::SessionError;
use p2p_share::peer::structs::peer_session::PeerSession;
use p2p_share::transfer::errors::TransferError;

#[tokio::test]
async fn test_search_download_and_readvertise() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    let root = tempfile::tempdir().unwrap();
    let alice_config = common::create_peer_config(tracker.address, &root, "alice");
    let contents = common::random_bytes(100_000);
    common::write_file(Path::new(&alice_config.share_directory), "song1.mp3", &contents);

    let alice = PeerSession::start(Arc::new(alice_config)).await.unwrap();
    let bob_config = common::create_peer_config(tracker.address, &root, "bob");
    let bob_downloads = bob_config.download_directory.clone();
    let bob = PeerSession::start(Arc::new(bob_config)).await.unwrap();

    let results = bob.search("SONG").await.unwrap();
    assert_eq!(results["song1.mp3"].len(), 1);
    assert_eq!(results["song1.mp3"][0].port(), alice.advertise_port());

    let session = bob.download("song1.mp3").await.unwrap();
    assert_eq!(session.bytes_transferred, 100_000);
    assert!(std::fs::read(Path::new(&bob_downloads).join("song1.mp3")).unwrap() == contents);

    assert_eq!(tracker.service.registry.hosters("song1.mp3"), vec!["alice".to_string(), "bob".to_string()]);
    let results = alice.search("song1").await.unwrap();
    assert_eq!(results["song1.mp3"].len(), 2, "The downloader should now be a second source");

    alice.shutdown().await;
    bob.shutdown().await;
}

#[tokio::test]
async fn test_failed_download_is_not_advertised() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    let root = tempfile::tempdir().unwrap();
    let alice = PeerSession::start(Arc::new(common::create_peer_config(tracker.address, &root, "alice"))).await.unwrap();
    let bob = PeerSession::start(Arc::new(common::create_peer_config(tracker.address, &root, "bob"))).await.unwrap();

    let address = tracker.service.registry.get_peer("alice").unwrap().address;
    let result = bob.download_from(address, "missing.mp3").await;
    assert!(matches!(result, Err(SessionError::Transfer(TransferError::FileNotFound(_)))));
    assert!(tracker.service.registry.list_files().is_empty());
    assert!(bob.local_files().is_empty());

    alice.shutdown().await;
    bob.shutdown().await;
}

#[tokio::test]
async fn test_download_requires_a_search_result() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    let root = tempfile::tempdir().unwrap();
    let bob = PeerSession::start(Arc::new(common::create_peer_config(tracker.address, &root, "bob"))).await.unwrap();

    let result = bob.download("never-searched.mp3").await;
    assert!(matches!(result, Err(SessionError::NotInSearchResults(_))));
    bob.shutdown().await;
}

#[tokio::test]
async fn test_heartbeat_registers_again_after_expiry() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    let root = tempfile::tempdir().unwrap();
    let config = common::create_peer_config(tracker.address, &root, "alice");
    common::write_file(Path::new(&config.share_directory), "keep.wav", b"data");
    let alice = PeerSession::start(Arc::new(config)).await.unwrap();

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(tracker.service.sweep(Duration::from_millis(30)), vec!["alice".to_string()]);
    assert!(!tracker.service.registry.contains_peer("alice"));

    alice.heartbeat().await.unwrap();
    assert!(tracker.service.registry.contains_peer("alice"));
    assert_eq!(tracker.service.registry.shares_of("alice"), vec!["keep.wav".to_string()]);
    alice.shutdown().await;
}

#[tokio::test]
async fn test_rescan_and_add_local_file() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    let root = tempfile::tempdir().unwrap();
    let config = common::create_peer_config(tracker.address, &root, "alice");
    let share_directory = config.share_directory.clone();
    common::write_file(Path::new(&share_directory), "old.mp3", b"old");
    let alice = PeerSession::start(Arc::new(config)).await.unwrap();
    assert_eq!(tracker.service.registry.list_files(), vec!["old.mp3".to_string()]);

    std::fs::remove_file(Path::new(&share_directory).join("old.mp3")).unwrap();
    assert!(alice.rescan().await.unwrap());
    assert!(tracker.service.registry.list_files().is_empty(), "Deleted files should be withdrawn");
    assert!(!alice.rescan().await.unwrap(), "An unchanged directory is not re-advertised");

    let outside = tempfile::tempdir().unwrap();
    common::write_file(outside.path(), "new.flac", b"new");
    let filename = alice.add_local_file(&outside.path().join("new.flac")).await.unwrap();
    assert_eq!(filename, "new.flac");
    assert_eq!(tracker.service.registry.list_files(), vec!["new.flac".to_string()]);
    alice.shutdown().await;
}

#[tokio::test]
async fn test_shutdown_unregisters() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    let root = tempfile::tempdir().unwrap();
    let config = common::create_peer_config(tracker.address, &root, "alice");
    common::write_file(Path::new(&config.share_directory), "a.mp3", b"a");
    let alice = PeerSession::start(Arc::new(config)).await.unwrap();
    assert_eq!(tracker.service.registry.peers_count(), 1);

    alice.shutdown().await;
    assert_eq!(tracker.service.registry.peers_count(), 0);
    assert_eq!(tracker.service.registry.files_count(), 0);
}

#[tokio::test]
async fn test_start_fails_without_tracker() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    let root = tempfile::tempdir().unwrap();

    let result = PeerSession::start(Arc::new(common::create_peer_config(address, &root, "alice"))).await;
    assert!(matches!(result, Err(SessionError::Network(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_downloads_are_all_advertised() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    let root = tempfile::tempdir().unwrap();
    let alice_config = common::create_peer_config(tracker.address, &root, "alice");
    for index in 0..30 {
        common::write_file(Path::new(&alice_config.share_directory), &format!("f{index}.bin"), &common::random_bytes(2048));
    }
    let alice = PeerSession::start(Arc::new(alice_config)).await.unwrap();
    let bob = PeerSession::start(Arc::new(common::create_peer_config(tracker.address, &root, "bob"))).await.unwrap();
    let address = tracker.service.registry.get_peer("alice").unwrap().address;

    let filenames: Vec<String> = (0..30).map(|index| format!("f{index}.bin")).collect();
    let downloads = filenames.iter().map(|filename| bob.download_from(address, filename));
    for result in futures_util::future::join_all(downloads).await {
        assert_eq!(result.unwrap().bytes_transferred, 2048);
    }

    assert_eq!(bob.local_files().len(), 30);
    assert_eq!(tracker.service.registry.shares_of("bob").len(), 30);
    alice.shutdown().await;
    bob.shutdown().await;
}

#[tokio::test]
async fn test_completed_download_survives_advertise_failure() {
    let tracker = common::start_tracker(common::create_test_config()).await;
    let root = tempfile::tempdir().unwrap();
    let alice_config = common::create_peer_config(tracker.address, &root, "alice");
    common::write_file(Path::new(&alice_config.share_directory), "track.ogg", b"ogg data");
    let alice = PeerSession::start(Arc::new(alice_config)).await.unwrap();
    let bob_config = common::create_peer_config(tracker.address, &root, "bob");
    let bob_downloads = bob_config.download_directory.clone();
    let bob = PeerSession::start(Arc::new(bob_config)).await.unwrap();
    let address = tracker.service.registry.get_peer("alice").unwrap().address;

    // The tracker forgets bob, so advertising after the download is rejected.
    assert!(tracker.service.unregister("bob").is_success());
    let session = bob.download_from(address, "track.ogg").await.unwrap();
    assert_eq!(session.bytes_transferred, 8);
    assert_eq!(std::fs::read(Path::new(&bob_downloads).join("track.ogg")).unwrap(), b"ogg data");
    assert_eq!(bob.local_files(), vec!["track.ogg".to_string()]);
    assert!(tracker.service.registry.shares_of("bob").is_empty());

    bob.register().await.unwrap();
    assert!(!bob.rescan().await.unwrap(), "The local set did not change");
    assert_eq!(tracker.service.registry.shares_of("bob"), vec!["track.ogg".to_string()]);
    alice.shutdown().await;
    bob.shutdown().await;
}
