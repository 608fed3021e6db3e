use serde::{Deserialize, Serialize};
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub api_server: Vec<ApiServerConfig>,
    pub peer: PeerConfig,
    #[serde(default)]
    pub sentry: SentryConfig,
}
