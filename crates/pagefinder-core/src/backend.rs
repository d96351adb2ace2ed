use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
}

/// Trait for PDF text extraction backends.
///
/// Implementors own the PDF format; the keyword search pipeline
/// (matching, aggregation) lives in [`crate::search`] and only sees
/// page counts and per-page plain text.
pub trait PdfBackend: Send + Sync {
    /// Open a PDF file. Failure here is fatal for the file.
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn PdfDocument + 'a>, BackendError>;
}

/// An opened PDF document.
pub trait PdfDocument {
    fn page_count(&self) -> usize;

    /// Extract the plain text of the page at 0-based `index`.
    ///
    /// An error here only affects this page; callers treat it as empty text.
    fn page_text(&self, index: usize) -> Result<String, BackendError>;
}
