mod resolver;
mod token;
mod types;

pub use resolver::{DirectoryClient, DirectoryConfig, DEFAULT_FALLBACK_URL, DEFAULT_PRIMARY_URL};
pub use token::PublicKeyToken;
pub use types::{DirectoryError, ResolvedUser, Result};
