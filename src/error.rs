//! Error types for docs2md.
//!
//! Extraction itself never fails: a page without a recognisable content
//! container still produces a document. Errors are reserved for the outer
//! collaborators (fetching, writing, URL input).

use std::path::PathBuf;

/// Error type for fetch, persistence and crawl operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network or HTTP failure while retrieving a page.
    #[error("failed to fetch {url}: {reason}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Transport error or non-success status.
        reason: String,
    },

    /// Filesystem failure while persisting a document.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Input that is not a valid absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        /// Rejected input.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },

    /// HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

/// Result type alias for docs2md operations.
pub type Result<T> = std::result::Result<T, Error>;
