use std::io;
use std::path::PathBuf;

/// Errors from the backing key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error reading or writing a stored value.
    #[error("I/O error for {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// A value could not be encoded for storage.
    #[error("Failed to encode value for key '{0}': {1}")]
    Encode(String, #[source] serde_json::Error),

    /// A key that cannot be mapped onto the backing store.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}
