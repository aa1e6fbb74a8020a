//! Error types for acquia-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] acquia_fs::Error),

    /// A merge layer did not fit the shape of the target type
    #[error("Invalid {what} after merge: {source}")]
    InvalidLayer {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
