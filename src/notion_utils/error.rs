use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotionError {
    /// Carries the input exactly as the caller passed it, before any URL stripping.
    #[error("Invalid Notion identifier: {0}")]
    InvalidIdentifier(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NotionError>;
