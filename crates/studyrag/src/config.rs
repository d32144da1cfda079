//! Configuration handling for the studyrag CLI.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use studyrag_core::ChunkConfig;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingSection,

    /// Store configuration
    #[serde(default)]
    pub store: StoreSection,

    /// Query configuration
    #[serde(default)]
    pub query: QuerySection,

    /// Embedding configuration
    #[serde(default)]
    pub embedding: EmbeddingSection,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Chunking-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingSection {
    /// Window length in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Shared characters between consecutive windows
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

fn default_chunk_size() -> usize {
    1000
}

fn default_overlap() -> usize {
    200
}

impl Default for ChunkingSection {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
        }
    }
}

impl ChunkingSection {
    /// Convert to the core chunking config.
    pub fn to_chunk_config(&self) -> ChunkConfig {
        ChunkConfig {
            chunk_size: self.chunk_size,
            overlap: self.overlap,
        }
    }
}

/// Store-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    /// Chunks embedded concurrently per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_batch_size() -> usize {
    5
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

/// Query-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuerySection {
    /// Default number of passages returned per question
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    3
}

impl Default for QuerySection {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

/// Embedding-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingSection {
    /// Local backend to use (ngram, noop)
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Embedding dimension for the local backends
    #[serde(default = "default_dimension")]
    pub dimension: usize,
}

fn default_backend() -> String {
    "ngram".to_string()
}

fn default_dimension() -> usize {
    384
}

impl Default for EmbeddingSection {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            dimension: default_dimension(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// defaults when no config file exists.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit path, the default location, or
    /// defaults.
    pub fn load_from(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let path = match path.or_else(Self::config_path) {
            Some(p) => p,
            None => return Ok(Self::default()),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Path of the config file, honoring `STUDYRAG_CONFIG_DIR`.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var("STUDYRAG_CONFIG_DIR") {
            return Some(PathBuf::from(dir).join("config.toml"));
        }

        ProjectDirs::from("", "", "studyrag")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Sample configuration file with all defaults spelled out.
    pub fn sample_toml() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::new())
    }
}
