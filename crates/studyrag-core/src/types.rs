//! Core types for studyrag.
//!
//! - [`ChunkConfig`]: sliding-window chunking parameters
//! - [`IndexProgress`]: progress report emitted while a store is built
//! - [`ScoredChunk`]: a matching chunk with its similarity score

use serde::{Deserialize, Serialize};

use crate::error::ChunkError;

/// Configuration for sliding-window chunking.
///
/// Windows are `chunk_size` characters long and consecutive windows share
/// `overlap` characters, so window `k` starts at
/// `k * (chunk_size - overlap)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Window length in characters
    pub chunk_size: usize,
    /// Shared characters between consecutive windows
    pub overlap: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap: 200,
        }
    }
}

impl ChunkConfig {
    /// Check that the configuration can make forward progress.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.chunk_size == 0 {
            return Err(ChunkError::InvalidConfig(
                "chunk_size must be greater than 0".to_string(),
            ));
        }
        if self.overlap >= self.chunk_size {
            return Err(ChunkError::InvalidConfig(format!(
                "overlap ({}) must be smaller than chunk_size ({})",
                self.overlap, self.chunk_size
            )));
        }
        Ok(())
    }

    /// Distance between consecutive window starts.
    ///
    /// Only meaningful for a validated configuration.
    pub fn stride(&self) -> usize {
        self.chunk_size - self.overlap
    }
}

/// Progress report emitted once per completed embedding batch during
/// store construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexProgress {
    /// Pipeline stage the report refers to
    pub stage: &'static str,
    /// Share of chunks processed so far, rounded to 0..=100
    pub percentage: u8,
}

/// A search result: chunk text with its cosine similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredChunk {
    /// The chunk text
    pub text: String,
    /// Cosine similarity to the query embedding
    pub score: f32,
}
