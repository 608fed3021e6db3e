mod common;

use std::fs;
use tempfile::TempDir;
use p2p_share::config::enums::configuration_error::ConfigurationError;
use p2p_share::config::structs::configuration::Configuration;

#[test]
fn test_config_toml_loading() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = r#"
log_level = "debug"
log_console_interval = 30

[tracker]
bind_address = "127.0.0.1:5000"
max_frame_size = 65536
connection_timeout = 60
peers_timeout = 90
peers_cleanup_interval = 15
event_capacity = 64

[[api_server]]
enabled = true
bind_address = "127.0.0.1:8080"
keep_alive = 60
request_timeout = 15
disconnect_timeout = 15
threads = 2

[peer]
peer_id = "studio-pc"
tracker_address = "127.0.0.1:5000"
bind_address = "0.0.0.0:0"
advertise_port = 0
share_directory = "music"
download_directory = "incoming"
share_extensions = ["mp3", "wav", "flac", "m4a"]
heartbeat_interval = 30
rescan_interval = 0
connect_timeout = 10
handshake_timeout = 15
max_frame_size = 65536
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_from_file(config_path.to_str().unwrap(), false).unwrap();
    assert_eq!(config.tracker.peers_timeout, 90);
    assert_eq!(config.api_server.len(), 1);
    assert_eq!(config.peer.peer_id, "studio-pc");
    assert_eq!(config.peer.share_extensions.len(), 4);
    assert!(config.peer.rescan_interval().is_none());
    assert!(!config.sentry.enabled, "Sentry section should default to disabled");
}

#[test]
fn test_config_missing_file_without_create() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("absent.toml");
    let result = Configuration::load_from_file(config_path.to_str().unwrap(), false);
    assert!(matches!(result, Err(ConfigurationError::IOError(_))));
    assert!(!config_path.exists(), "Nothing should be written without --create-config");
}

#[test]
fn test_config_created_file_loads_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();
    assert!(matches!(Configuration::load_from_file(path, true), Err(ConfigurationError::Created(_))));

    let config = Configuration::load_from_file(path, false).unwrap();
    assert_eq!(config, Configuration::init());
}

#[test]
fn test_config_used_by_test_tracker_is_valid() {
    assert!(common::create_test_config().validate().is_ok());
}
