//! No-op embedder for testing.
//!
//! This module provides a [`NoopEmbedder`] that returns zero-vectors for
//! all inputs. It's useful for:
//! - Stubbing embeddings in unit tests
//! - Development builds that never rank results

use async_trait::async_trait;
use studyrag_core::{EmbedError, Embedder};

use crate::DEFAULT_DIMENSION;

/// No-op embedder that returns zero-vectors.
///
/// Every zero-vector scores a cosine similarity of 0 against everything,
/// so search over a store built with this embedder returns chunks in
/// document order.
///
/// # Example
///
/// ```rust
/// use studyrag_embed::NoopEmbedder;
/// use studyrag_core::Embedder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let embedder = NoopEmbedder::new();
/// let out = embedder.embed("Hello").await?;
///
/// assert_eq!(out.len(), 384);
/// assert!(out.iter().all(|&v| v == 0.0));
/// # Ok(())
/// # }
/// ```
pub struct NoopEmbedder {
    dimension: usize,
}

impl NoopEmbedder {
    /// Create a new no-op embedder with the default dimension (384).
    #[must_use]
    pub fn new() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
        }
    }

    /// Create a new no-op embedder with a custom dimension.
    #[must_use]
    pub fn with_dimension(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Embedding dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl Default for NoopEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Embedder for NoopEmbedder {
    fn model_name(&self) -> &str {
        "noop"
    }

    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbedError> {
        Ok(vec![0.0; self.dimension])
    }
}
