use serde::{Deserialize, Serialize};

/// Frames a downloader sends to a peer's transfer server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum TransferRequest {
    Download {
        filename: String,
    },
    /// Acknowledges a [`TransferReply::Found`](crate::protocol::enums::transfer_reply::TransferReply::Found); the raw bytes follow.
    Ready,
}
