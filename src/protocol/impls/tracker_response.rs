use std::collections::BTreeMap;
use crate::protocol::enums::response_status::ResponseStatus;
use crate::protocol::structs::peer_address::PeerAddress;
use crate::protocol::structs::tracker_response::TrackerResponse;

impl TrackerResponse {
    pub fn success(message: impl Into<String>) -> TrackerResponse {
        TrackerResponse {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            results: None,
            peers: None,
            files: None,
        }
    }

    pub fn error(message: impl Into<String>) -> TrackerResponse {
        TrackerResponse {
            status: ResponseStatus::Error,
            message: Some(message.into()),
            results: None,
            peers: None,
            files: None,
        }
    }

    fn empty_success() -> TrackerResponse {
        TrackerResponse {
            status: ResponseStatus::Success,
            message: None,
            results: None,
            peers: None,
            files: None,
        }
    }

    pub fn with_results(results: BTreeMap<String, Vec<PeerAddress>>) -> TrackerResponse {
        TrackerResponse { results: Some(results), ..Self::empty_success() }
    }

    pub fn with_peers(peers: Vec<(String, PeerAddress)>) -> TrackerResponse {
        TrackerResponse { peers: Some(peers), ..Self::empty_success() }
    }

    pub fn with_files(files: Vec<String>) -> TrackerResponse {
        TrackerResponse { files: Some(files), ..Self::empty_success() }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}
