//! # studyrag CLI
//!
//! Question answering over a single document via in-memory semantic
//! retrieval: the document is chunked into overlapping windows, each
//! window is embedded, and questions are answered by ranking windows
//! against the question embedding with cosine similarity.
//!
//! There is no persistence: a store lives and dies with the process, so
//! indexing and querying happen inside one `query` invocation.
//!
//! ## Commands
//!
//! - `studyrag query <FILE> <QUESTION>` - Retrieve the most relevant passages
//! - `studyrag chunks <FILE>` - Show how a document would be chunked
//! - `studyrag config show|init|path` - Manage configuration
//!
//! ## Examples
//!
//! ```bash
//! # Ask a question against a text file
//! studyrag query notes.txt "what is photosynthesis?"
//!
//! # Get JSON output with five passages
//! studyrag query notes.txt "mitochondria" --top-k 5 --format json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use studyrag_core::Embedder;
use studyrag_embed::{NgramEmbedder, NoopEmbedder};
use studyrag_store::{StoreConfig, VectorStore};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "studyrag")]
#[command(about = "Semantic retrieval over a single document")]
#[command(version)]
struct Cli {
    /// Path to config file (default: ~/.config/studyrag/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum EmbedderBackend {
    /// Deterministic character n-gram hashing
    Ngram,
    /// Zero-vectors (testing only)
    Noop,
}

#[derive(Subcommand)]
enum Commands {
    /// Retrieve the passages most relevant to a question
    Query {
        /// Document to search (plain text)
        file: PathBuf,

        /// The question to answer
        question: String,

        /// Number of passages to return
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Window length in characters
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Shared characters between consecutive windows
        #[arg(long)]
        overlap: Option<usize>,

        /// Chunks embedded concurrently per batch
        #[arg(long)]
        batch_size: Option<usize>,

        /// Local embedding backend
        #[arg(long)]
        embedder: Option<EmbedderBackend>,

        /// Embedding dimension for the local backends
        #[arg(long)]
        dimension: Option<usize>,
    },

    /// Show how a document would be chunked
    Chunks {
        /// Document to chunk (plain text)
        file: PathBuf,

        /// Window length in characters
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Shared characters between consecutive windows
        #[arg(long)]
        overlap: Option<usize>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Print sample configuration file
    Init,
    /// Show config file path
    Path,
}

/// Output structure for query results.
#[derive(Serialize)]
struct QueryOutput {
    question: String,
    model: String,
    chunk_count: usize,
    results: Vec<ResultItem>,
}

#[derive(Serialize)]
struct ResultItem {
    rank: usize,
    score: f32,
    content: String,
}

/// Output structure for chunk stats.
#[derive(Serialize)]
struct ChunksOutput {
    file: String,
    chunk_size: usize,
    overlap: usize,
    chunk_count: usize,
    chars: usize,
}

fn build_embedder(backend: EmbedderBackend, dimension: usize) -> Box<dyn Embedder> {
    match backend {
        EmbedderBackend::Ngram => Box::new(NgramEmbedder::with_dimension(dimension)),
        EmbedderBackend::Noop => Box::new(NoopEmbedder::with_dimension(dimension)),
    }
}

fn parse_backend(name: &str) -> Result<EmbedderBackend> {
    match name {
        "ngram" => Ok(EmbedderBackend::Ngram),
        "noop" => Ok(EmbedderBackend::Noop),
        other => anyhow::bail!("unknown embedding backend in config: {other}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = match cli.config.clone() {
        Some(path) => Config::load_from(Some(path.clone()))
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    match cli.command {
        Commands::Query {
            file,
            question,
            top_k,
            chunk_size,
            overlap,
            batch_size,
            embedder,
            dimension,
        } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let backend = match embedder {
                Some(backend) => backend,
                None => parse_backend(&config.embedding.backend)?,
            };
            let dimension = dimension.unwrap_or(config.embedding.dimension);
            let embedder = build_embedder(backend, dimension);

            let mut chunking = config.chunking.to_chunk_config();
            if let Some(chunk_size) = chunk_size {
                chunking.chunk_size = chunk_size;
            }
            if let Some(overlap) = overlap {
                chunking.overlap = overlap;
            }

            let store_config = StoreConfig {
                chunking,
                batch_size: batch_size.unwrap_or(config.store.batch_size),
            };
            let top_k = top_k.unwrap_or(config.query.top_k);

            info!(
                "Indexing {} ({} chars, model {})",
                file.display(),
                text.chars().count(),
                embedder.model_name()
            );

            let bar = ProgressBar::new(100);
            bar.set_style(
                ProgressStyle::with_template("{msg} [{bar:40}] {pos}%")
                    .context("invalid progress template")?,
            );
            bar.set_message("embedding");

            let mut store = VectorStore::with_config(store_config);
            store
                .create_with_progress(&text, embedder.as_ref(), |progress| {
                    bar.set_position(u64::from(progress.percentage));
                })
                .await
                .context("Failed to build the index")?;
            bar.finish_and_clear();

            let hits = store
                .search_scored(&question, embedder.as_ref(), top_k)
                .await
                .context("Search failed")?;

            match cli.format {
                OutputFormat::Json => {
                    let output = QueryOutput {
                        question: question.clone(),
                        model: embedder.model_name().to_string(),
                        chunk_count: store.len(),
                        results: hits
                            .iter()
                            .enumerate()
                            .map(|(i, hit)| ResultItem {
                                rank: i + 1,
                                score: hit.score,
                                content: hit.text.clone(),
                            })
                            .collect(),
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Text => {
                    println!("Question: {question}\n");
                    if hits.is_empty() {
                        println!("No passages found (empty document?).");
                    } else {
                        for (i, hit) in hits.iter().enumerate() {
                            println!("{}. (score: {:.3})", i + 1, hit.score);
                            println!("   {}", truncate(&hit.text, 200));
                            println!();
                        }
                    }
                }
            }
        }

        Commands::Chunks {
            file,
            chunk_size,
            overlap,
        } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let mut chunk_config = config.chunking.to_chunk_config();
            if let Some(chunk_size) = chunk_size {
                chunk_config.chunk_size = chunk_size;
            }
            if let Some(overlap) = overlap {
                chunk_config.overlap = overlap;
            }

            let chunks = studyrag_chunker::chunk(&text, &chunk_config)
                .context("Failed to chunk the document")?;

            match cli.format {
                OutputFormat::Json => {
                    let output = ChunksOutput {
                        file: file.to_string_lossy().to_string(),
                        chunk_size: chunk_config.chunk_size,
                        overlap: chunk_config.overlap,
                        chunk_count: chunks.len(),
                        chars: text.chars().count(),
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Text => {
                    println!("Chunks for {}", file.display());
                    println!("  Characters: {}", text.chars().count());
                    println!(
                        "  Window: {} chars, overlap {}",
                        chunk_config.chunk_size, chunk_config.overlap
                    );
                    println!("  Chunks: {}", chunks.len());
                    for (i, chunk) in chunks.iter().enumerate() {
                        println!("  {:>3}: {} chars", i, chunk.chars().count());
                    }
                }
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => match cli.format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&config)
                            .context("Failed to serialize config")?
                    );
                }
                OutputFormat::Text => {
                    println!(
                        "{}",
                        toml::to_string_pretty(&config).context("Failed to serialize config")?
                    );
                }
            },
            ConfigAction::Init => {
                println!("{}", Config::sample_toml());
            }
            ConfigAction::Path => {
                if let Some(path) = Config::config_path() {
                    println!("{}", path.display());
                } else {
                    println!("Could not determine config directory");
                }
            }
        },
    }

    Ok(())
}

/// Truncate a string to max length, adding ellipsis if needed.
fn truncate(s: &str, max_len: usize) -> String {
    let s = s.replace(['\n', '\r'], " ");
    if s.chars().count() <= max_len {
        s
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
