//! Error types for acquia-cloud

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The token exchange was rejected; carries the remote `error_description`
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// A write to the remote directory failed
    #[error("{0}")]
    Remote(String),

    /// An authenticated call was made before `auth`
    #[error("Not authenticated, call auth first")]
    NotAuthenticated,

    #[error(transparent)]
    Fs(#[from] acquia_fs::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
