//! Document chunking for studyrag.

pub mod window;

pub use window::{chunk, chunk_with_defaults};
