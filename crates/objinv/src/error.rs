use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("invalid inventory header at line {line}: {reason}")]
    InvalidHeader { line: usize, reason: String },

    #[error("unsupported inventory version: {0}")]
    UnsupportedVersion(String),

    #[error("malformed inventory entry at line {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },

    #[error("compression failed: {0}")]
    CompressionFailed(String),

    #[error("decompression failed: {0}")]
    DecompressionFailed(String),

    #[error("invalid manifest: {0}")]
    Manifest(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InventoryResult<T> = Result<T, InventoryError>;
