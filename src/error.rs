use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnipnoteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snippet database not found at: {0}")]
    DatabaseNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Snippet '{0}' not found")]
    SnippetNotFound(String),
}

pub type Result<T> = std::result::Result<T, SnipnoteError>;
