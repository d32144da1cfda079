//! In-memory vector storage and search for studyrag.

pub mod memory;
pub mod similarity;

pub use memory::{StoreConfig, VectorStore, DEFAULT_BATCH_SIZE, DEFAULT_TOP_K};
pub use similarity::cosine_similarity;
