use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PeerIdBody {
    pub peer_id: String,
}
