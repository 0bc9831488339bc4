use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("image error: {0}")]
    Image(String),
    #[error("font error: {0}")]
    Font(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CardError>;

/// One user to render: a non-empty display name and the raw public key
/// that goes into the scannable code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardUser {
    pub display_name: String,
    pub key: String,
}

/// Whether each user gets a file of their own or all users share one
/// multi-page document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    PerUserFile,
    SingleFile,
}
