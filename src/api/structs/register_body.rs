use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisterBody {
    pub peer_id: String,
    #[serde(alias = "peer_port")]
    pub listen_port: u16,
}
