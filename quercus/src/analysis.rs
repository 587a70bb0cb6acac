//! Text analysis for query lines.
//!
//! A query line is broken into words by scanning left to right: every maximal
//! run of alphabetic characters is one word, and every other character
//! (digit, punctuation, whitespace) is a separator. Words are lowercased to
//! match the keys the corpus indexer writes into the inverted index.
//!
//! ```
//! use quercus::analysis::tokenize;
//!
//! let words = tokenize("cat, dog!  fish123");
//! assert_eq!(words, vec!["cat", "dog", "fish"]);
//! ```

/// Lazy iterator over the words of a query line.
///
/// Created by [`words`]. Yields owned, lowercased words; the sequence is
/// finite and unbounded in length.
pub struct Words<'a> {
    rest: &'a str,
}

/// Iterate over the words of `line`.
pub fn words(line: &str) -> Words<'_> {
    Words { rest: line }
}

/// Collect the words of `line` into a vector.
pub fn tokenize(line: &str) -> Vec<String> {
    words(line).collect()
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let start = self.rest.find(|c: char| c.is_alphabetic())?;
        let tail = &self.rest[start..];
        let len = tail
            .find(|c: char| !c.is_alphabetic())
            .unwrap_or(tail.len());
        self.rest = &tail[len..];
        Some(tail[..len].to_lowercase())
    }
}
