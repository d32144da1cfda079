//! Error types for studyrag.

use thiserror::Error;

/// Main error type for studyrag operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Chunking failed
    #[error("chunking error: {0}")]
    Chunking(#[from] ChunkError),

    /// Embedding generation failed
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbedError),

    /// Vector store operation failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Chunking errors.
#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Embedding errors.
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("embedding backend failed: {0}")]
    Backend(String),
}

/// Vector store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type alias for studyrag operations.
pub type Result<T> = std::result::Result<T, Error>;
