//! Store Errors

use thiserror::Error;

/// Errors raised by a key-value store or while (de)serializing its entries.
///
/// These never reach the view: `PersistentStore::load`/`save` log them and
/// fall back to defaults.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },

    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },

    #[error("failed to serialize '{key}'")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed data under '{key}'")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
