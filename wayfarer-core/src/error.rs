use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store has not been loaded yet")]
    NotLoaded,

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TopologyError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported topology document: {0}")]
    Unsupported(String),
}

pub type Result<T, E = StorageError> = std::result::Result<T, E>;
