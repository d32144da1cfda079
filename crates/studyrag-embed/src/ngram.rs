//! Deterministic character n-gram hashing embedder.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use studyrag_core::{EmbedError, Embedder};

use crate::DEFAULT_DIMENSION;

const DEFAULT_NGRAM: usize = 3;

/// Embedder that hashes character n-grams into a fixed-dimension vector.
///
/// Each n-gram of the lowercased input is hashed to a bucket and counted;
/// the resulting vector is L2-normalized. Texts sharing many n-grams land
/// close together under cosine similarity, which makes this embedder a
/// usable offline stand-in for a semantic model and a fully deterministic
/// backend for tests and the CLI.
pub struct NgramEmbedder {
    dimension: usize,
    ngram: usize,
}

impl NgramEmbedder {
    /// Create a new embedder with the default dimension (384) and
    /// trigram windows.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            ngram: DEFAULT_NGRAM,
        }
    }

    /// Create a new embedder with a custom dimension.
    #[must_use]
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            ngram: DEFAULT_NGRAM,
        }
    }

    /// Embedding dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn bucket(&self, gram: &[char]) -> usize {
        // DefaultHasher::new() uses fixed keys, so buckets are stable
        // across runs and processes.
        let mut hasher = DefaultHasher::new();
        gram.hash(&mut hasher);
        (hasher.finish() % self.dimension as u64) as usize
    }

    fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        let chars: Vec<char> = text.to_lowercase().chars().collect();
        if chars.is_empty() {
            return vector;
        }

        if chars.len() < self.ngram {
            vector[self.bucket(&chars)] += 1.0;
        } else {
            for gram in chars.windows(self.ngram) {
                vector[self.bucket(gram)] += 1.0;
            }
        }

        let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        vector
    }
}

impl Default for NgramEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Embedder for NgramEmbedder {
    fn model_name(&self) -> &str {
        "char-ngram"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        Ok(self.embed_sync(text))
    }
}
