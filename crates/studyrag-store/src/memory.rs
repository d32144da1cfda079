//! In-memory vector store over a single document.
//!
//! The store owns an ordered sequence of (chunk, embedding) pairs built
//! from a document with [`VectorStore::create`] and answers similarity
//! queries with [`VectorStore::search`]. Search is a brute-force cosine
//! scan, sized for single-document corpora.

use futures::future;
use studyrag_core::{
    ChunkConfig, Embedder, Error, IndexProgress, Result, ScoredChunk, StoreError,
};
use tracing::debug;

use crate::similarity::cosine_similarity;

/// Upper bound on embedding calls in flight during `create`.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Default number of chunks returned by `search`.
pub const DEFAULT_TOP_K: usize = 3;

/// Configuration for building a [`VectorStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Chunking parameters used by `create`
    pub chunking: ChunkConfig,
    /// Chunks embedded concurrently per batch
    pub batch_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            chunking: ChunkConfig::default(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// One indexed chunk with its embedding.
#[derive(Debug, Clone)]
struct StoreEntry {
    chunk: String,
    embedding: Vec<f32>,
}

/// In-memory semantic index over one document.
///
/// `create` takes `&mut self` and `search` takes `&self`: at most one
/// rebuild can be in flight per store, while a populated store can serve
/// any number of concurrent reads.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = VectorStore::new();
/// store.create(&document_text, &embedder).await?;
/// let passages = store.search("what is photosynthesis?", &embedder, 3).await?;
/// ```
pub struct VectorStore {
    config: StoreConfig,
    entries: Vec<StoreEntry>,
    dimension: Option<usize>,
}

impl VectorStore {
    /// Create an empty store with default configuration (1000/200 windows,
    /// batches of 5).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with custom configuration.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            dimension: None,
        }
    }

    /// Number of indexed chunks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Embedding dimension fixed by the first indexed chunk, if any.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Indexed chunk texts in document order.
    pub fn chunks(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.chunk.as_str())
    }

    /// Build the index from `text`, discarding any prior contents.
    pub async fn create(&mut self, text: &str, embedder: &dyn Embedder) -> Result<()> {
        self.create_with_progress(text, embedder, |_| {}).await
    }

    /// Build the index from `text`, reporting progress once per batch.
    ///
    /// Chunks are embedded in batches of `batch_size`: all calls within a
    /// batch run concurrently, batches run sequentially, and entries are
    /// appended in document order. The callback receives the cumulative
    /// percentage after each batch, ending at 100.
    ///
    /// Any embedding failure aborts the build and leaves the store empty;
    /// a failed `create` never leaves stale or partial contents behind.
    pub async fn create_with_progress<F>(
        &mut self,
        text: &str,
        embedder: &dyn Embedder,
        on_progress: F,
    ) -> Result<()>
    where
        F: FnMut(IndexProgress),
    {
        self.entries.clear();
        self.dimension = None;

        if let Err(err) = self.index_chunks(text, embedder, on_progress).await {
            self.entries.clear();
            self.dimension = None;
            return Err(err);
        }

        Ok(())
    }

    async fn index_chunks<F>(
        &mut self,
        text: &str,
        embedder: &dyn Embedder,
        mut on_progress: F,
    ) -> Result<()>
    where
        F: FnMut(IndexProgress),
    {
        let chunks = studyrag_chunker::chunk(text, &self.config.chunking)?;
        let total = chunks.len();
        if total == 0 {
            debug!("no chunks produced, store left empty");
            return Ok(());
        }

        let mut processed = 0usize;
        for batch in chunks.chunks(self.config.batch_size) {
            let embeddings =
                future::try_join_all(batch.iter().map(|chunk| embedder.embed(chunk)))
                    .await
                    .map_err(Error::Embedding)?;

            for (chunk, embedding) in batch.iter().zip(embeddings) {
                self.check_dimension(embedding.len())?;
                self.entries.push(StoreEntry {
                    chunk: chunk.clone(),
                    embedding,
                });
            }

            processed += batch.len();
            let percentage = ((processed as f64 / total as f64) * 100.0).round() as u8;
            on_progress(IndexProgress {
                stage: "embedding",
                percentage,
            });
        }

        debug!(
            "indexed {} chunks (dimension {:?}, model {})",
            total,
            self.dimension,
            embedder.model_name()
        );
        Ok(())
    }

    fn check_dimension(&mut self, actual: usize) -> Result<()> {
        match self.dimension {
            None => {
                self.dimension = Some(actual);
                Ok(())
            }
            Some(expected) if expected != actual => {
                Err(Error::Store(StoreError::DimensionMismatch {
                    expected,
                    actual,
                }))
            }
            Some(_) => Ok(()),
        }
    }

    /// Return the `top_k` most similar chunk texts for `query`.
    ///
    /// An empty store returns an empty result without calling the
    /// embedder. Results are ordered by descending cosine similarity;
    /// equal scores keep document order.
    pub async fn search(
        &self,
        query: &str,
        embedder: &dyn Embedder,
        top_k: usize,
    ) -> Result<Vec<String>> {
        let hits = self.search_scored(query, embedder, top_k).await?;
        Ok(hits.into_iter().map(|hit| hit.text).collect())
    }

    /// Like [`search`](Self::search), but keeps the similarity score of
    /// each returned chunk.
    pub async fn search_scored(
        &self,
        query: &str,
        embedder: &dyn Embedder,
        top_k: usize,
    ) -> Result<Vec<ScoredChunk>> {
        if self.entries.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = embedder.embed(query).await.map_err(Error::Embedding)?;
        if let Some(expected) = self.dimension {
            if query_embedding.len() != expected {
                return Err(Error::Store(StoreError::DimensionMismatch {
                    expected,
                    actual: query_embedding.len(),
                }));
            }
        }

        let mut scored: Vec<(f32, &StoreEntry)> = self
            .entries
            .iter()
            .map(|entry| (cosine_similarity(&query_embedding, &entry.embedding), entry))
            .collect();

        // Stable sort keeps document order between equal scores.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        debug!("ranked {} chunks for query", scored.len());

        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(score, entry)| ScoredChunk {
                text: entry.chunk.clone(),
                score,
            })
            .collect())
    }
}

impl Default for VectorStore {
    fn default() -> Self {
        Self::new()
    }
}
