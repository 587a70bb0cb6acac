//! Syntactic validation of a tokenized query.
//!
//! Validation runs over token identity alone; it never consults the index.
//! A rejected query names the offending token(s) and the rule it broke.

use crate::error::{QuercusError, Result};

/// Whether a word is one of the reserved operators.
pub fn is_operator(word: &str) -> bool {
    word == "and" || word == "or"
}

/// Check operator placement over the token sequence.
///
/// Fails when the sequence starts or ends with an operator, or when two
/// operators are adjacent. An empty sequence is valid; downstream it simply
/// matches no documents.
pub fn validate(words: &[String]) -> Result<()> {
    if let Some(first) = words.first() {
        if is_operator(first) {
            return Err(QuercusError::query(format!("'{first}' cannot be first")));
        }
    }
    if let Some(last) = words.last() {
        if is_operator(last) {
            return Err(QuercusError::query(format!("'{last}' cannot be last")));
        }
    }
    for pair in words.windows(2) {
        if is_operator(&pair[0]) && is_operator(&pair[1]) {
            return Err(QuercusError::query(format!(
                "'{}' and '{}' cannot be adjacent",
                pair[0], pair[1]
            )));
        }
    }
    Ok(())
}
