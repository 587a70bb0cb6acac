//! Boolean query processing.
//!
//! A query line flows through three stages:
//!
//! ```text
//! line → analysis::tokenize → validate → evaluate → rank
//! ```
//!
//! [`validate`](validate::validate) rejects malformed operator placement,
//! [`evaluate`](evaluate::evaluate) runs the AND/OR set algebra against the
//! inverted index, and [`rank`](rank::rank) resolves URLs and orders the
//! matching documents by descending score.

pub mod evaluate;
pub mod rank;
pub mod validate;
