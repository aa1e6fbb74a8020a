//! Error types for acquia-core

/// Result type for acquia-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// User options do not fit the recipe option shape
    #[error("Invalid recipe options: {0}")]
    InvalidOptions(#[source] serde_json::Error),

    /// The remote directory rejected the credentials
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Environments were requested without a key and secret
    #[error("No Acquia API credentials available")]
    MissingCredentials,

    /// The interactive prompt could not be completed
    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error(transparent)]
    Fs(#[from] acquia_fs::Error),

    #[error(transparent)]
    Meta(#[from] acquia_meta::Error),

    #[error(transparent)]
    Cloud(acquia_cloud::Error),
}

impl From<acquia_cloud::Error> for Error {
    fn from(err: acquia_cloud::Error) -> Self {
        match err {
            acquia_cloud::Error::Authentication(description) => Self::Authentication(description),
            other => Self::Cloud(other),
        }
    }
}
