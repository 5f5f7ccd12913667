//! File chunking example.
//!
//! Run with:
//!     cargo run --example chunk_file -- /path/to/file --chunk-size 4096
//!
//! Set `RUST_LOG=fixchunk=debug` to see open/summary events on stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fixchunk::{ChunkConfig, Chunker, DEFAULT_CHUNK_SIZE};

#[derive(Parser, Debug)]
#[command(
    name = "chunk_file",
    version,
    about = "Split a file into fixed-size, offset-tagged chunks"
)]
struct Cli {
    /// File to chunk
    path: PathBuf,

    /// Chunk size in bytes
    #[arg(long, short = 's', env = "FIXCHUNK_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the chunk listing.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ChunkConfig::new(cli.chunk_size).context("invalid --chunk-size")?;
    let chunks = Chunker::new(config)
        .chunk_file(&cli.path)
        .with_context(|| format!("chunking {}", cli.path.display()))?;

    for (i, chunk) in chunks.iter().enumerate() {
        println!(
            "Chunk {}: offset={:>10}, len={:>8}",
            i + 1,
            chunk.offset,
            chunk.len()
        );
    }

    let total_bytes: u64 = chunks.last().map_or(0, |c| c.end());
    println!("\nTotal: {} chunks, {} bytes", chunks.len(), total_bytes);
    tracing::info!(path = %cli.path.display(), chunks = chunks.len(), "done");

    Ok(())
}
