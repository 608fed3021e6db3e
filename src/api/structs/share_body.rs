use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShareBody {
    pub peer_id: String,
    #[serde(alias = "files")]
    pub filenames: Vec<String>,
    #[serde(default)]
    pub replace: bool,
}
