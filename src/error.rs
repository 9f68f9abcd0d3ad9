//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every pipeline stage reports through this enum; any variant aborts the run.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No usable credentials: set an access token or a client id/secret pair")]
    AuthenticationRequired,

    #[error("Unsupported response type from provider: {content_type}")]
    UnsupportedResponseType { content_type: String },

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider returned an empty image body")]
    EmptyResponse,

    #[error("Failed to write {}: {source}", path.display())]
    PersistenceFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::ProviderRequestFailed(e.to_string())
    }
}

impl Error {
    pub fn provider<E: std::fmt::Display>(e: E) -> Self {
        Error::ProviderRequestFailed(e.to_string())
    }

    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::PersistenceFailed {
            path: path.into(),
            source,
        }
    }
}
