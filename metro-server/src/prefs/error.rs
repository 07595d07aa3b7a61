//! Preference storage errors.

/// Errors from reading or writing stored preferences.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    /// Reading or writing the backing file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a JSON object of strings
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored value does not decode as the expected type
    #[error("stored value for {key} is corrupt: {message}")]
    Corrupt { key: String, message: String },
}
