//! The inverted index and its per-word document counters.
//!
//! [`InvertedIndex`] maps each word of the corpus to a [`DocCounters`] set:
//! a sparse document-id → occurrence-count map. The index is produced by the
//! corpus indexer and persisted as a line-oriented text file, one word per
//! line:
//!
//! ```text
//! word docID count [docID count]...
//! ```
//!
//! During query evaluation the index is read-only; lookups hand out borrows
//! of the stored counters and the evaluator clones what it needs to mutate.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use ahash::AHashMap;
use tracing::debug;

use crate::error::{QuercusError, Result};

/// Identifier of a crawled document. The crawler numbers pages from 1.
pub type DocId = u32;

/// Sparse document-id → occurrence-count map.
///
/// Counters are the unit of intermediate and final query results: the index
/// stores one per word, and the evaluator combines them with
/// [`intersect`](DocCounters::intersect) and [`union`](DocCounters::union).
/// Counts are always positive; an entry that would drop to zero is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocCounters {
    counts: AHashMap<DocId, u32>,
}

impl DocCounters {
    /// Create an empty counter set.
    pub fn new() -> Self {
        DocCounters::default()
    }

    /// Set the count for a document. A zero count removes the entry.
    pub fn insert(&mut self, doc_id: DocId, count: u32) {
        if count == 0 {
            self.counts.remove(&doc_id);
        } else {
            self.counts.insert(doc_id, count);
        }
    }

    /// The count for a document, zero if absent.
    pub fn get(&self, doc_id: DocId) -> u32 {
        self.counts.get(&doc_id).copied().unwrap_or(0)
    }

    /// Number of documents with a positive count.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no document has a positive count.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(doc_id, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, u32)> + '_ {
        self.counts.iter().map(|(&doc_id, &count)| (doc_id, count))
    }

    /// Keep only documents present in both sets, taking the smaller count.
    ///
    /// Documents known only to `other` are never introduced, and documents
    /// absent from `other` drop out of `self`. The result depends only on
    /// the `(doc_id, count)` pairs of the inputs, never on iteration order.
    pub fn intersect(&mut self, other: &DocCounters) {
        self.counts.retain(|doc_id, count| {
            *count = (*count).min(other.get(*doc_id));
            *count > 0
        });
    }

    /// Accumulate `other` into `self`, summing counts for shared documents.
    pub fn union(&mut self, other: &DocCounters) {
        for (doc_id, count) in other.iter() {
            *self.counts.entry(doc_id).or_insert(0) += count;
        }
    }
}

/// Read-only word → [`DocCounters`] mapping loaded from an index file.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: AHashMap<String, DocCounters>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Set the count of `word` in document `doc_id`.
    pub fn insert(&mut self, word: impl Into<String>, doc_id: DocId, count: u32) {
        self.postings
            .entry(word.into())
            .or_default()
            .insert(doc_id, count);
    }

    /// The counters recorded for `word`, if the word occurs in the corpus.
    pub fn lookup(&self, word: &str) -> Option<&DocCounters> {
        self.postings.get(word)
    }

    /// Number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Load an index from the file written by the corpus indexer.
    ///
    /// Each line holds one word followed by `docID count` pairs. A line
    /// with a dangling id or a non-numeric field is rejected with an
    /// error naming the line number.
    pub fn load(path: impl AsRef<Path>) -> Result<InvertedIndex> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            QuercusError::index(format!("cannot open {}: {err}", path.display()))
        })?;

        let mut index = InvertedIndex::new();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };

            let counters = index.postings.entry(word.to_string()).or_default();
            let mut fields = fields.peekable();
            while fields.peek().is_some() {
                let (doc_id, count) = parse_pair(&mut fields)
                    .ok_or_else(|| malformed(path, number + 1, &line))?;
                counters.insert(doc_id, count);
            }
        }

        debug!("loaded {} words from {}", index.len(), path.display());
        Ok(index)
    }

    /// Write the index in the same line-oriented format [`load`] reads.
    ///
    /// [`load`]: InvertedIndex::load
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|err| {
            QuercusError::index(format!("cannot create {}: {err}", path.display()))
        })?;

        let mut out = BufWriter::new(file);
        for (word, counters) in &self.postings {
            write!(out, "{word}")?;
            for (doc_id, count) in counters.iter() {
                write!(out, " {doc_id} {count}")?;
            }
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Parse one `docID count` pair off the field iterator.
fn parse_pair<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Option<(DocId, u32)> {
    let doc_id = fields.next()?.parse().ok()?;
    let count = fields.next()?.parse().ok()?;
    Some((doc_id, count))
}

fn malformed(path: &Path, number: usize, line: &str) -> QuercusError {
    QuercusError::index(format!(
        "malformed line {number} in {}: {line:?}",
        path.display()
    ))
}
