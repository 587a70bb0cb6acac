use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

/// Quercus - boolean keyword search over a crawled corpus
#[derive(Parser)]
#[command(name = "quercus", version, about)]
pub struct Cli {
    /// Directory produced by the crawl step (one file per page).
    pub page_dir: PathBuf,

    /// Inverted index file produced by the corpus indexer.
    pub index_file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}
