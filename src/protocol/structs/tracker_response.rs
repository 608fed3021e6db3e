use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::protocol::enums::response_status::ResponseStatus;
use crate::protocol::structs::peer_address::PeerAddress;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Search hits: filename to the addresses of its hosters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<BTreeMap<String, Vec<PeerAddress>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peers: Option<Vec<(String, PeerAddress)>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
}
