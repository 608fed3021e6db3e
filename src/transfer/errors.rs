use thiserror::Error;
use crate::protocol::errors::ProtocolError;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("File not found on peer: {0}")]
    FileNotFound(String),

    #[error("Short transfer: received {received} of {expected} bytes")]
    ShortTransfer { received: u64, expected: u64 },

    #[error("Timed out waiting for {0}")]
    Timeout(&'static str),

    #[error("Network error: {0}")]
    Network(std::io::Error),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
