use std::path::PathBuf;

use indexmap::IndexMap;
use thiserror::Error;

pub mod backend;
pub mod config_file;
pub mod keywords;
pub mod matcher;
pub mod mock;
pub mod paths;
pub mod search;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend, PdfDocument};
pub use keywords::{load_keywords, parse_keywords};
pub use matcher::KeywordMatcher;
pub use paths::{InputSelection, resolve_pdf_paths};
pub use search::{ScanOptions, ScanOutcome, SkippedFile, search_all, search_document};

/// Ascending, duplicate-free list of 1-based page numbers.
pub type PageList = Vec<u32>;

/// Keyword -> pages for one document, in keyword order.
pub type FileMatches = IndexMap<String, PageList>;

/// Filename -> per-keyword pages for a whole run, in resolved path order.
pub type AggregateReport = IndexMap<String, FileMatches>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("failed to read keywords file {}: {source}", .path.display())]
    KeywordsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("PDF directory not found: {}", .0.display())]
    PdfDirNotFound(PathBuf),
    #[error("PDF file not found: {}", .0.display())]
    PdfFileNotFound(PathBuf),
    #[error("failed to list PDF directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("exactly one of a PDF directory or a PDF file must be given")]
    InvalidSelection,
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error("invalid keyword {keyword:?}: {source}")]
    Matcher {
        keyword: String,
        #[source]
        source: regex::Error,
    },
}

/// Progress events emitted while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    FileStarted {
        index: usize,
        total: usize,
        filename: String,
    },
    /// Text extraction failed for one page; the page was treated as empty.
    PageFailed {
        filename: String,
        /// 1-based page number.
        page: u32,
        message: String,
    },
    FileFinished {
        index: usize,
        total: usize,
        filename: String,
        /// Number of keywords that matched at least one page.
        matched_keywords: usize,
    },
    /// The file could not be opened and was left out of the report.
    FileSkipped {
        index: usize,
        total: usize,
        filename: String,
        message: String,
    },
}

/// Base name of `path` as used for report keys.
pub fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
