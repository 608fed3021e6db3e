use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Frame of {size} bytes exceeds the limit of {max} bytes")]
    FrameTooLarge { size: u64, max: u32 },

    #[error("Connection closed in the middle of a frame")]
    Truncated,

    #[error("Connection closed before a message arrived")]
    ConnectionClosed,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("malformed request: {0}")]
    Malformed(String),
}

impl ProtocolError {
    /// A connection that produced this error cannot be read from again.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ProtocolError::UnknownCommand(_) | ProtocolError::Malformed(_))
    }
}
