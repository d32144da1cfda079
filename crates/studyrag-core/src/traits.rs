//! Core traits for studyrag components.

use async_trait::async_trait;

use crate::error::EmbedError;

/// Trait for generating embeddings.
///
/// The embedding backend is always injected into the pipeline as a trait
/// object; the store never constructs one itself. Implementations must
/// return vectors of consistent dimensionality across all calls used
/// against one store instance.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Model name/identifier.
    fn model_name(&self) -> &str;

    /// Embed a piece of text into a vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;
}
