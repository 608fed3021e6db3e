use serde::{Deserialize, Serialize};
use crate::protocol::structs::peer_address::PeerAddress;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TrackerEvent {
    PeerListUpdated {
        peers: Vec<(String, PeerAddress)>,
    },
    FileListUpdated {
        files: Vec<String>,
    },
}
