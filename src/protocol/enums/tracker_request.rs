use serde::{Deserialize, Serialize};

/// Command names the tracker understands.
pub const TRACKER_COMMANDS: [&str; 8] = [
    "register",
    "share",
    "search",
    "list_peers",
    "get_peers",
    "list_files",
    "heartbeat",
    "unregister",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum TrackerRequest {
    Register {
        peer_id: String,
        #[serde(alias = "peer_port")]
        listen_port: u16,
    },
    Share {
        peer_id: String,
        #[serde(alias = "files")]
        filenames: Vec<String>,
        /// Set the peer's shares to exactly `filenames` instead of adding to them.
        #[serde(default)]
        replace: bool,
    },
    Search {
        #[serde(default)]
        keyword: String,
    },
    #[serde(alias = "get_peers")]
    ListPeers,
    ListFiles,
    Heartbeat {
        peer_id: String,
    },
    Unregister {
        peer_id: String,
    },
}
