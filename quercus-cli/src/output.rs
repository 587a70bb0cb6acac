//! Rendering of query results.

use clap::ValueEnum;
use quercus::SearchResult;

/// Output format for query results.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// The classic result block: a count line plus one line per document.
    Plain,
    /// JSON array of results.
    Json,
}

/// Echo the normalized word sequence back to the user.
pub fn print_query(words: &[String]) {
    println!("Query: {}", words.join(" "));
}

/// Print one result block.
pub fn print_results(results: &[SearchResult], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(results).unwrap());
        }
        OutputFormat::Plain => {
            println!();
            if results.is_empty() {
                println!("No documents match");
            } else {
                println!("{} matching documents (ranked)", results.len());
                for result in results {
                    println!(
                        "Score: {:<5} DocID: {:<5} {}",
                        result.score, result.doc_id, result.url
                    );
                }
            }
            println!();
        }
    }
}
