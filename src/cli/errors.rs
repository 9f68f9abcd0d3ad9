use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Output path is a directory: {path}")]
    OutputIsDirectory { path: String },

    #[error(transparent)]
    Acquisition(#[from] seawatch::Error),
}

impl AppError {
    pub fn needs_usage(&self) -> bool {
        matches!(
            self,
            AppError::Acquisition(seawatch::Error::AuthenticationRequired)
        )
    }
}
