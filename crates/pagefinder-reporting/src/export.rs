use std::path::Path;

use pagefinder_core::AggregateReport;

use crate::{ExportFormat, ReportError};

/// Write `report` to `path` in the given format.
///
/// Parent directories are created as needed and an existing file is
/// overwritten.
pub fn export_report(
    report: &AggregateReport,
    format: ExportFormat,
    path: &Path,
) -> Result<(), ReportError> {
    let content = match format {
        ExportFormat::Json => render_json(report)?,
        ExportFormat::Csv => render_csv(report),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content.as_bytes()).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), format = format.extension(), "report written");
    Ok(())
}

pub fn write_json(report: &AggregateReport, path: &Path) -> Result<(), ReportError> {
    export_report(report, ExportFormat::Json, path)
}

pub fn write_csv(report: &AggregateReport, path: &Path) -> Result<(), ReportError> {
    export_report(report, ExportFormat::Csv, path)
}

/// Pretty-printed JSON with two-space indentation, keys in report order.
/// Non-ASCII text is written as-is.
pub fn render_json(report: &AggregateReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn csv_escape(s: &str) -> String {
    if s.contains('"') || s.contains(',') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn join_pages(pages: &[u32]) -> String {
    pages
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One row per (filename, keyword), pages joined by `", "`.
pub fn render_csv(report: &AggregateReport) -> String {
    let mut out = String::from("filename,keyword,pages\r\n");
    for (filename, matches) in report {
        for (keyword, pages) in matches {
            out.push_str(&format!(
                "{},{},{}\r\n",
                csv_escape(filename),
                csv_escape(keyword),
                csv_escape(&join_pages(pages)),
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagefinder_core::FileMatches;

    fn sample() -> AggregateReport {
        let mut a = FileMatches::new();
        a.insert("invoice".to_string(), vec![2, 5]);
        a.insert("total".to_string(), vec![]);
        let mut b = FileMatches::new();
        b.insert("invoice".to_string(), vec![1]);
        b.insert("total".to_string(), vec![3]);
        let mut report = AggregateReport::new();
        report.insert("a.pdf".to_string(), a);
        report.insert("b.pdf".to_string(), b);
        report
    }

    #[test]
    fn test_csv_escape_quotes() {
        assert_eq!(csv_escape(r#"say "hi""#), r#""say ""hi""""#);
    }

    #[test]
    fn test_csv_escape_comma() {
        assert_eq!(csv_escape("1, 2"), "\"1, 2\"");
    }

    #[test]
    fn test_csv_escape_newlines() {
        assert_eq!(csv_escape("a\nb"), "\"a\nb\"");
        assert_eq!(csv_escape("a\rb"), "\"a\rb\"");
    }

    #[test]
    fn test_csv_escape_clean() {
        assert_eq!(csv_escape("invoice"), "invoice");
        assert_eq!(csv_escape(""), "");
    }

    #[test]
    fn test_join_pages() {
        assert_eq!(join_pages(&[]), "");
        assert_eq!(join_pages(&[7]), "7");
        assert_eq!(join_pages(&[1, 2, 10]), "1, 2, 10");
    }

    #[test]
    fn test_render_csv() {
        assert_eq!(
            render_csv(&sample()),
            "filename,keyword,pages\r\n\
             a.pdf,invoice,\"2, 5\"\r\n\
             a.pdf,total,\r\n\
             b.pdf,invoice,1\r\n\
             b.pdf,total,3\r\n"
        );
    }

    #[test]
    fn test_render_csv_empty_report() {
        assert_eq!(render_csv(&AggregateReport::new()), "filename,keyword,pages\r\n");
    }

    #[test]
    fn test_render_json_layout() {
        let mut m = FileMatches::new();
        m.insert("café".to_string(), vec![1, 3]);
        m.insert("none".to_string(), vec![]);
        let mut report = AggregateReport::new();
        report.insert("menü.pdf".to_string(), m);

        assert_eq!(
            render_json(&report).unwrap(),
            "{\n  \"menü.pdf\": {\n    \"café\": [\n      1,\n      3\n    ],\n    \"none\": []\n  }\n}"
        );
    }

    #[test]
    fn test_render_json_preserves_insertion_order() {
        let mut report = AggregateReport::new();
        for name in ["z.pdf", "a.pdf", "m.pdf"] {
            report.insert(name.to_string(), FileMatches::new());
        }
        let json = render_json(&report).unwrap();
        let z = json.find("z.pdf").unwrap();
        let a = json.find("a.pdf").unwrap();
        let m = json.find("m.pdf").unwrap();
        assert!(z < a && a < m);
    }
}
