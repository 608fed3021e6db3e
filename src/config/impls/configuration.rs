use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use std::time::Duration;
use regex::Regex;
use crate::common::common::{is_valid_peer_id, parse_log_level};
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::protocol::protocol::DEFAULT_MAX_FRAME_SIZE;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker: TrackerConfig {
                bind_address: String::from("0.0.0.0:5000"),
                max_frame_size: DEFAULT_MAX_FRAME_SIZE,
                connection_timeout: 300,
                peers_timeout: 90,
                peers_cleanup_interval: 15,
                event_capacity: 256,
            },
            api_server: vec!(
                ApiServerConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8080"),
                    keep_alive: 60,
                    request_timeout: 30,
                    disconnect_timeout: 30,
                    threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1),
                }
            ),
            peer: PeerConfig {
                peer_id: String::new(),
                tracker_address: String::from("127.0.0.1:5000"),
                bind_address: String::from("0.0.0.0:5001"),
                advertise_port: 0,
                share_directory: String::from("shared"),
                download_directory: String::from("downloads"),
                share_extensions: vec![],
                heartbeat_interval: 30,
                rescan_interval: 60,
                connect_timeout: 10,
                handshake_timeout: 15,
                max_frame_size: DEFAULT_MAX_FRAME_SIZE,
            },
            sentry: SentryConfig {
                enabled: false,
                dsn: String::new(),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => Err(ConfigurationError::Created(path.to_string())),
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        Err(e)
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        parse_log_level(self.log_level.as_str())?;

        let mut addresses = vec![
            ("[tracker] bind_address", self.tracker.bind_address.as_str()),
            ("[peer] bind_address", self.peer.bind_address.as_str()),
        ];
        for api_server in self.api_server.iter().filter(|api_server| api_server.enabled) {
            addresses.push(("[api_server] bind_address", api_server.bind_address.as_str()));
        }
        for (name, value) in addresses {
            if value.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("{name} \"{value}\" is not a socket address")));
            }
        }

        if self.peer.tracker_address.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[peer] tracker_address is empty")));
        }
        if !self.peer.peer_id.is_empty() && !is_valid_peer_id(&self.peer.peer_id) {
            return Err(ConfigurationError::ValidationError(format!("[peer] peer_id \"{}\" is not a valid peer id", self.peer.peer_id)));
        }

        let extension_check = Regex::new(r"^[a-z0-9]{1,16}$").map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        for extension in &self.peer.share_extensions {
            if !extension_check.is_match(extension) {
                return Err(ConfigurationError::ValidationError(format!("[peer] share extension \"{extension}\" must be lowercase alphanumeric without a dot")));
            }
        }

        if self.tracker.max_frame_size == 0 || self.peer.max_frame_size == 0 {
            return Err(ConfigurationError::ValidationError(String::from("max_frame_size must be greater than zero")));
        }
        if self.tracker.peers_timeout == 0 || self.tracker.peers_cleanup_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[tracker] peers_timeout and peers_cleanup_interval must be greater than zero")));
        }
        if self.peer.heartbeat_interval >= self.tracker.peers_timeout {
            log::warn!("[VALIDATE] heartbeat_interval ({}s) is not below peers_timeout ({}s), peers may expire between heartbeats",
                self.peer.heartbeat_interval, self.tracker.peers_timeout);
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl TrackerConfig {
    pub fn staleness_window(&self) -> Duration {
        Duration::from_secs(self.peers_timeout)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.peers_cleanup_interval)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout)
    }
}

impl PeerConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.handshake_timeout)
    }

    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_interval)
    }

    pub fn rescan_interval(&self) -> Option<Duration> {
        match self.rescan_interval {
            0 => None,
            seconds => Some(Duration::from_secs(seconds))
        }
    }
}
