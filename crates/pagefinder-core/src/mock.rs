//! In-memory PDF backend for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, PdfBackend, PdfDocument};

/// A configurable page for [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockPage {
    /// The page extracts to this text (may be empty).
    Text(String),
    /// Extraction of this page fails with this message.
    Error(String),
}

impl MockPage {
    pub fn text(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// A hand-rolled fake implementing [`PdfBackend`] for tests.
///
/// Documents are registered by path. Opening an unregistered path, or one
/// registered with [`unreadable()`](MockBackend::unreadable), fails.
#[derive(Default)]
pub struct MockBackend {
    documents: HashMap<PathBuf, Vec<MockPage>>,
    unreadable: HashMap<PathBuf, String>,
    open_count: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document whose pages extract to the given texts.
    pub fn with_document(mut self, path: impl Into<PathBuf>, pages: &[&str]) -> Self {
        let pages = pages.iter().map(|t| MockPage::text(t)).collect();
        self.documents.insert(path.into(), pages);
        self
    }

    /// Register a document with explicit per-page behavior.
    pub fn with_pages(mut self, path: impl Into<PathBuf>, pages: Vec<MockPage>) -> Self {
        self.documents.insert(path.into(), pages);
        self
    }

    /// Register a path that fails to open.
    pub fn unreadable(mut self, path: impl Into<PathBuf>, message: &str) -> Self {
        self.unreadable.insert(path.into(), message.to_string());
        self
    }

    /// How many times `open` has been called.
    pub fn open_count(&self) -> usize {
        self.open_count.load(Ordering::SeqCst)
    }
}

impl PdfBackend for MockBackend {
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn PdfDocument + 'a>, BackendError> {
        self.open_count.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.unreadable.get(path) {
            return Err(BackendError::OpenError(message.clone()));
        }
        match self.documents.get(path) {
            Some(pages) => Ok(Box::new(MockDocument { pages })),
            None => Err(BackendError::OpenError(format!(
                "no such document: {}",
                path.display()
            ))),
        }
    }
}

struct MockDocument<'a> {
    pages: &'a [MockPage],
}

impl PdfDocument for MockDocument<'_> {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, BackendError> {
        match self.pages.get(index) {
            Some(MockPage::Text(text)) => Ok(text.clone()),
            Some(MockPage::Error(message)) => Err(BackendError::ExtractionError(message.clone())),
            None => Err(BackendError::ExtractionError(format!(
                "page {index} out of range"
            ))),
        }
    }
}
