use thiserror::Error;
use crate::protocol::errors::ProtocolError;
use crate::transfer::errors::TransferError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Tracker rejected {command}: {message}")]
    Rejected { command: &'static str, message: String },

    #[error("{0} is not in the last search results")]
    NotInSearchResults(String),

    #[error("Invalid filename: {0:?}")]
    InvalidFilename(String),

    #[error("Transfer failed: {0}")]
    Transfer(#[from] TransferError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Network error: {0}")]
    Network(std::io::Error),

    #[error("Timed out waiting for {0}")]
    Timeout(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
