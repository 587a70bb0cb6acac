//! The interactive query loop.

use anyhow::Result;
use quercus::{InvertedIndex, PageStore, analysis, evaluate, rank, validate};
use rustyline::DefaultEditor;

use crate::output::{self, OutputFormat};

/// Prompt shown before each query line.
const PROMPT: &str = "Query? ";

/// Read queries from standard input until end-of-input.
///
/// Each query is fully processed, and its intermediate sets dropped, before
/// the next line is read. A syntax error discards the query and the loop
/// carries on.
pub fn run(index: &InvertedIndex, pages: &PageStore, format: OutputFormat) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(
                rustyline::error::ReadlineError::Interrupted | rustyline::error::ReadlineError::Eof,
            ) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line.trim());

        let words = analysis::tokenize(&line);
        if let Err(err) = validate(&words) {
            eprintln!("Error: {err}");
            continue;
        }

        output::print_query(&words);
        let results = match evaluate(index, &words) {
            Some(scores) => rank(&scores, pages),
            None => Vec::new(),
        };
        output::print_results(&results, format);
    }

    Ok(())
}
