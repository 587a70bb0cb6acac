//! Page store: resolves document ids to the pages saved by the crawler.
//!
//! The crawler writes one file per fetched page into its output directory,
//! named by document id. The first line of a page file is the source URL,
//! the second the crawl depth, and the rest the page HTML; only the URL
//! concerns the querier. The crawler also deposits a `.crawler` marker
//! file, which is how a directory is recognized as crawl output.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{QuercusError, Result};
use crate::index::DocId;

/// Marker file the crawler leaves in its output directory.
const CRAWLER_MARKER: &str = ".crawler";

/// Read-only access to a crawler output directory.
#[derive(Debug, Clone)]
pub struct PageStore {
    dir: PathBuf,
}

impl PageStore {
    /// Open a crawler output directory.
    ///
    /// Fails unless the path is a directory carrying the crawler marker.
    pub fn open(dir: impl Into<PathBuf>) -> Result<PageStore> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(QuercusError::store(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
        if !dir.join(CRAWLER_MARKER).is_file() {
            return Err(QuercusError::store(format!(
                "{} is not a crawler directory",
                dir.display()
            )));
        }
        Ok(PageStore { dir })
    }

    /// Resolve the source URL of a document.
    ///
    /// Reads the first line of the document's page file. A missing file is
    /// a [`QuercusError::NotFound`]; a page file without a URL line is a
    /// store error.
    pub fn url(&self, doc_id: DocId) -> Result<String> {
        let path = self.dir.join(doc_id.to_string());
        let file = File::open(&path)
            .map_err(|_| QuercusError::not_found(format!("page file {}", path.display())))?;

        let mut line = String::new();
        BufReader::new(file).read_line(&mut line)?;
        let url = line.trim_end();
        if url.is_empty() {
            return Err(QuercusError::store(format!(
                "page file {} has no URL line",
                path.display()
            )));
        }
        Ok(url.to_string())
    }

    /// The underlying directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crawl_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CRAWLER_MARKER), "").unwrap();
        dir
    }

    fn write_page(dir: &Path, doc_id: DocId, url: &str) {
        let body = format!("{url}\n0\n<html>page body</html>\n");
        std::fs::write(dir.join(doc_id.to_string()), body).unwrap();
    }

    #[test]
    fn test_open_requires_directory() {
        assert!(PageStore::open("/nonexistent/pages").is_err());
    }

    #[test]
    fn test_open_requires_crawler_marker() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PageStore::open(dir.path()).is_err());
    }

    #[test]
    fn test_open_accepts_crawl_output() {
        let dir = crawl_dir();
        assert!(PageStore::open(dir.path()).is_ok());
    }

    #[test]
    fn test_url_reads_first_line() {
        let dir = crawl_dir();
        write_page(dir.path(), 1, "http://example.com/index.html");

        let store = PageStore::open(dir.path()).unwrap();
        assert_eq!(store.url(1).unwrap(), "http://example.com/index.html");
    }

    #[test]
    fn test_url_missing_page_is_not_found() {
        let dir = crawl_dir();
        let store = PageStore::open(dir.path()).unwrap();

        assert!(matches!(store.url(9), Err(QuercusError::NotFound(_))));
    }

    #[test]
    fn test_url_empty_page_file_is_error() {
        let dir = crawl_dir();
        std::fs::write(dir.path().join("3"), "").unwrap();

        let store = PageStore::open(dir.path()).unwrap();
        assert!(store.url(3).is_err());
    }
}
