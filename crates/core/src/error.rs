use thiserror::Error;

pub type DineOpsResult<T> = Result<T, DineOpsError>;

#[derive(Error, Debug)]
pub enum DineOpsError {
    /// A segment key that is not part of the configured segment set. This is
    /// a programming error (misconfigured tab key), never a transient fault.
    #[error("Unknown segment key: {0}")]
    UnknownSegment(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
