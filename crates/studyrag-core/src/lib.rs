//! # studyrag-core
//!
//! Core types and traits for the studyrag semantic retrieval engine.
//!
//! studyrag turns a single document into a searchable in-memory knowledge
//! base: the document is split into overlapping windows, each window is
//! embedded into a vector, and questions are answered by ranking windows
//! against the question embedding with cosine similarity.
//!
//! This crate provides the abstractions shared by the pipeline:
//!
//! - **Embedding Generation**: the [`Embedder`] trait for converting text
//!   to vector embeddings (the embedding backend is always injected, never
//!   constructed here)
//! - **Chunking configuration**: [`ChunkConfig`]
//! - **Indexing progress**: [`IndexProgress`]
//! - **Search results**: [`ScoredChunk`]
//! - **Errors**: [`Error`] and the per-stage [`ChunkError`], [`EmbedError`],
//!   [`StoreError`]
//!
//! ## Architecture
//!
//! ```text
//! Document text → chunker → Embedder → VectorStore
//!                                          ↓
//!                                   query → ranked chunks
//! ```
//!
//! ## Related Crates
//!
//! - `studyrag-chunker`: sliding-window chunking
//! - `studyrag-embed`: local [`Embedder`] implementations
//! - `studyrag-store`: in-memory vector store and search

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ChunkError, EmbedError, Error, Result, StoreError};
pub use traits::Embedder;
pub use types::{ChunkConfig, IndexProgress, ScoredChunk};
