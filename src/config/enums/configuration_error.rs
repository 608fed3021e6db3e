use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration created at {0}, edit it and start again")]
    Created(String),
}
