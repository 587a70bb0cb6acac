mod cli;
mod output;
mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use quercus::{InvertedIndex, PageStore};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let pages = PageStore::open(&cli.page_dir).with_context(|| {
        format!(
            "failed to open page directory {}",
            cli.page_dir.display()
        )
    })?;
    let index = InvertedIndex::load(&cli.index_file).with_context(|| {
        format!("failed to load index file {}", cli.index_file.display())
    })?;

    repl::run(&index, &pages, cli.format)
}
