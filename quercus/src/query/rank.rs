//! Ranking and URL resolution for final query results.

use serde::Serialize;
use tracing::warn;

use crate::index::{DocCounters, DocId};
use crate::store::PageStore;

/// One matching document: its id, summed relevance score, and source URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub doc_id: DocId,
    pub score: u32,
    pub url: String,
}

/// Turn a final score mapping into results sorted by descending score.
///
/// Ties are broken by ascending document id, making the output order fully
/// deterministic. A document whose URL cannot be read is skipped with a
/// warning rather than failing the whole query.
pub fn rank(scores: &DocCounters, pages: &PageStore) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = scores
        .iter()
        .filter_map(|(doc_id, score)| match pages.url(doc_id) {
            Ok(url) => Some(SearchResult { doc_id, score, url }),
            Err(err) => {
                warn!("skipping document {doc_id}: {err}");
                None
            }
        })
        .collect();

    results.sort_unstable_by(|a, b| b.score.cmp(&a.score).then(a.doc_id.cmp(&b.doc_id)));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crawl_dir(doc_ids: &[DocId]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".crawler"), "").unwrap();
        for doc_id in doc_ids {
            let body = format!("http://example.com/{doc_id}\n0\n<html></html>\n");
            std::fs::write(dir.path().join(doc_id.to_string()), body).unwrap();
        }
        dir
    }

    fn counters(pairs: &[(DocId, u32)]) -> DocCounters {
        let mut c = DocCounters::new();
        for &(doc_id, count) in pairs {
            c.insert(doc_id, count);
        }
        c
    }

    #[test]
    fn test_descending_score_order() {
        let dir = crawl_dir(&[1, 2, 3]);
        let pages = PageStore::open(dir.path()).unwrap();

        let results = rank(&counters(&[(1, 3), (2, 7), (3, 7)]), &pages);
        let ranked: Vec<(DocId, u32)> = results.iter().map(|r| (r.doc_id, r.score)).collect();

        // Both score-7 documents precede the score-3 document; the tie
        // resolves by ascending doc id.
        assert_eq!(ranked, vec![(2, 7), (3, 7), (1, 3)]);
    }

    #[test]
    fn test_urls_resolved_per_document() {
        let dir = crawl_dir(&[4]);
        let pages = PageStore::open(dir.path()).unwrap();

        let results = rank(&counters(&[(4, 1)]), &pages);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "http://example.com/4");
    }

    #[test]
    fn test_unresolvable_document_is_skipped() {
        // Document 9 has no page file; the result set carries on without it.
        let dir = crawl_dir(&[1]);
        let pages = PageStore::open(dir.path()).unwrap();

        let results = rank(&counters(&[(1, 2), (9, 5)]), &pages);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].doc_id, 1);
    }

    #[test]
    fn test_empty_scores_rank_empty() {
        let dir = crawl_dir(&[]);
        let pages = PageStore::open(dir.path()).unwrap();

        assert!(rank(&DocCounters::new(), &pages).is_empty());
    }
}
