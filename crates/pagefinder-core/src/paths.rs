use std::path::{Path, PathBuf};

use crate::CoreError;

/// Which PDFs to search: every PDF in a directory, or one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSelection {
    Directory(PathBuf),
    File(PathBuf),
}

impl InputSelection {
    /// Build a selection from two optional paths, exactly one of which must be set.
    pub fn from_options(dir: Option<PathBuf>, file: Option<PathBuf>) -> Result<Self, CoreError> {
        match (dir, file) {
            (Some(dir), None) => Ok(Self::Directory(dir)),
            (None, Some(file)) => Ok(Self::File(file)),
            _ => Err(CoreError::InvalidSelection),
        }
    }
}

/// Resolve the selection to the ordered list of PDF paths to search.
pub fn resolve_pdf_paths(selection: &InputSelection) -> Result<Vec<PathBuf>, CoreError> {
    match selection {
        InputSelection::File(path) => {
            if !path.exists() {
                return Err(CoreError::PdfFileNotFound(path.clone()));
            }
            Ok(vec![path.clone()])
        }
        InputSelection::Directory(dir) => pdfs_in_dir(dir),
    }
}

fn pdfs_in_dir(dir: &Path) -> Result<Vec<PathBuf>, CoreError> {
    if !dir.exists() {
        return Err(CoreError::PdfDirNotFound(dir.to_path_buf()));
    }
    let read_dir_err = |source| CoreError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        if is_pdf(&path) && path.is_file() {
            paths.push(path);
        }
    }

    // Alphabetical by name; raw name breaks ties between case variants.
    paths.sort_by_cached_key(|p| {
        let name = p.file_name().map(|n| n.to_string_lossy().to_string());
        let name = name.unwrap_or_default();
        (name.to_lowercase(), name)
    });
    tracing::debug!(dir = %dir.display(), count = paths.len(), "resolved PDF directory");
    Ok(paths)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths.iter().map(|p| crate::display_name(p)).collect()
    }

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"%PDF-1.4\n").unwrap();
    }

    #[test]
    fn test_directory_filters_and_sorts_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "B.pdf");
        touch(dir.path(), "a.PDF");
        touch(dir.path(), "c.txt");

        let paths = resolve_pdf_paths(&InputSelection::Directory(dir.path().to_path_buf())).unwrap();
        assert_eq!(names(&paths), vec!["a.PDF", "B.pdf"]);
    }

    #[test]
    fn test_directory_skips_subdirs_and_extensionless() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "report.Pdf");
        touch(dir.path(), "pdf");
        touch(dir.path(), "notes.pdf.bak");
        std::fs::create_dir(dir.path().join("nested.pdf")).unwrap();
        touch(&dir.path().join("nested.pdf"), "inner.pdf");

        let paths = resolve_pdf_paths(&InputSelection::Directory(dir.path().to_path_buf())).unwrap();
        assert_eq!(names(&paths), vec!["report.Pdf"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = resolve_pdf_paths(&InputSelection::Directory(dir.path().to_path_buf())).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let err = resolve_pdf_paths(&InputSelection::Directory("/nonexistent/pdfs".into()))
            .unwrap_err();
        assert!(matches!(err, CoreError::PdfDirNotFound(_)));
    }

    #[test]
    fn test_single_file() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "scan.txt");
        let file = dir.path().join("scan.txt");
        let paths = resolve_pdf_paths(&InputSelection::File(file.clone())).unwrap();
        assert_eq!(paths, vec![file]);
    }

    #[test]
    fn test_missing_single_file() {
        let err =
            resolve_pdf_paths(&InputSelection::File("/nonexistent/a.pdf".into())).unwrap_err();
        assert!(matches!(err, CoreError::PdfFileNotFound(_)));
    }

    #[test]
    fn test_from_options_requires_exactly_one() {
        assert_eq!(
            InputSelection::from_options(Some("d".into()), None).unwrap(),
            InputSelection::Directory("d".into())
        );
        assert_eq!(
            InputSelection::from_options(None, Some("f.pdf".into())).unwrap(),
            InputSelection::File("f.pdf".into())
        );
        assert!(matches!(
            InputSelection::from_options(None, None),
            Err(CoreError::InvalidSelection)
        ));
        assert!(matches!(
            InputSelection::from_options(Some("d".into()), Some("f.pdf".into())),
            Err(CoreError::InvalidSelection)
        ));
    }
}
