use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_console: i64,
    pub timestamp_run_sweep: i64,
    pub peers: i64,
    pub files: i64,
    pub connections_handled: i64,
    pub requests_handled: i64,
    pub bad_requests: i64,
    pub peers_registered: i64,
    pub peers_unregistered: i64,
    pub peers_expired: i64,
    pub api_handled: i64,
}
