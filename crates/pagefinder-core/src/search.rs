use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::backend::PdfBackend;
use crate::matcher::KeywordMatcher;
use crate::{AggregateReport, CoreError, FileMatches, ScanEvent, display_name};

/// Options for a multi-file scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Leave files that cannot be opened out of the report instead of
    /// aborting the whole run.
    pub skip_unreadable: bool,
}

/// A file left out of the report because it could not be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub message: String,
}

/// Result of [`search_all`].
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub report: AggregateReport,
    pub skipped: Vec<SkippedFile>,
}

/// Search one PDF for every keyword.
///
/// Returns each keyword's 1-based matching pages, ascending. Every keyword
/// is present in the result, with an empty list if nothing matched.
/// A page whose text cannot be extracted counts as empty; failing to open
/// the document is an error.
pub fn search_document(
    path: &Path,
    keywords: &[String],
    backend: &dyn PdfBackend,
    observer: &dyn Fn(ScanEvent),
) -> Result<FileMatches, CoreError> {
    let matchers = keywords
        .iter()
        .map(|k| KeywordMatcher::new(k))
        .collect::<Result<Vec<_>, _>>()?;
    let mut hits: Vec<BTreeSet<u32>> = vec![BTreeSet::new(); matchers.len()];

    let document = backend.open(path).map_err(|source| CoreError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let page_count = document.page_count();
    tracing::debug!(path = %path.display(), page_count, "opened document");

    for index in 0..page_count {
        let page = (index + 1) as u32;
        let text = match document.page_text(index) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(path = %path.display(), page, error = %e, "page extraction failed, treating as empty");
                observer(ScanEvent::PageFailed {
                    filename: display_name(path),
                    page,
                    message: e.to_string(),
                });
                String::new()
            }
        };
        if text.is_empty() {
            continue;
        }
        for (matcher, pages) in matchers.iter().zip(hits.iter_mut()) {
            if matcher.is_match(&text) {
                pages.insert(page);
            }
        }
    }

    let mut matches = FileMatches::with_capacity(keywords.len());
    for (matcher, pages) in matchers.iter().zip(hits) {
        // Duplicate keywords keep the first position; their hits are identical.
        matches.insert(matcher.keyword().to_string(), pages.into_iter().collect());
    }
    Ok(matches)
}

/// Search every PDF in `paths`, in order, keyed by base filename.
///
/// By default the first file that cannot be opened aborts the run. With
/// [`ScanOptions::skip_unreadable`] such files are recorded in
/// [`ScanOutcome::skipped`] and the scan continues.
pub fn search_all(
    paths: &[PathBuf],
    keywords: &[String],
    backend: &dyn PdfBackend,
    options: ScanOptions,
    observer: impl Fn(ScanEvent),
) -> Result<ScanOutcome, CoreError> {
    let total = paths.len();
    let mut outcome = ScanOutcome::default();

    for (index, path) in paths.iter().enumerate() {
        let filename = display_name(path);
        observer(ScanEvent::FileStarted {
            index,
            total,
            filename: filename.clone(),
        });

        match search_document(path, keywords, backend, &observer) {
            Ok(matches) => {
                let matched_keywords = matches.values().filter(|p| !p.is_empty()).count();
                observer(ScanEvent::FileFinished {
                    index,
                    total,
                    filename: filename.clone(),
                    matched_keywords,
                });
                outcome.report.insert(filename, matches);
            }
            Err(CoreError::Open { path, source }) if options.skip_unreadable => {
                tracing::debug!(path = %path.display(), error = %source, "skipping unreadable PDF");
                let message = source.to_string();
                observer(ScanEvent::FileSkipped {
                    index,
                    total,
                    filename,
                    message: message.clone(),
                });
                outcome.skipped.push(SkippedFile { path, message });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(outcome)
}
