use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
    #[error("no directory entry for key {key}")]
    NotFound { key: String },
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

/// A user whose display name is known, either embedded in the input
/// token or resolved through a directory service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUser {
    pub display_name: String,
    pub key: String,
}
