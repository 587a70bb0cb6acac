//! The boolean evaluator: AND within a run of words, OR across runs.
//!
//! Words not separated by `or` form a conjunctive run: every word in the run
//! must match, and a document's score within the run is the minimum of its
//! per-word counts. `or` closes the run and adds its scores into the running
//! result. An explicit `and` is syntactic sugar for the implicit conjunction
//! between bare words.

use crate::index::{DocCounters, InvertedIndex};

/// Evaluate a validated token sequence against the index.
///
/// Returns the final document → score mapping, or `None` when no clause
/// matched any document. Accumulators are created fresh per call and every
/// intermediate set is dropped before the function returns, so repeated
/// evaluation of the same input always yields the same mapping.
pub fn evaluate(index: &InvertedIndex, words: &[String]) -> Option<DocCounters> {
    let mut and_seq: Option<DocCounters> = None;
    let mut or_seq: Option<DocCounters> = None;
    let mut short_circuit = false;

    for word in words {
        match word.as_str() {
            "or" => {
                merge(&mut and_seq, &mut or_seq);
                short_circuit = false;
            }
            "and" => {}
            _ if short_circuit => {
                // The current run already failed; absorb its remaining
                // words until the next `or`.
            }
            word => match index.lookup(word) {
                None => {
                    and_seq = None;
                    short_circuit = true;
                }
                Some(counters) => match and_seq.as_mut() {
                    None => and_seq = Some(counters.clone()),
                    Some(seq) => seq.intersect(counters),
                },
            },
        }
    }

    merge(&mut and_seq, &mut or_seq);
    or_seq.filter(|scores| !scores.is_empty())
}

/// Fold the current conjunctive run into the disjunctive accumulator.
fn merge(and_seq: &mut Option<DocCounters>, or_seq: &mut Option<DocCounters>) {
    if let Some(seq) = and_seq.take() {
        match or_seq.as_mut() {
            None => *or_seq = Some(seq),
            Some(acc) => acc.union(&seq),
        }
    }
}
