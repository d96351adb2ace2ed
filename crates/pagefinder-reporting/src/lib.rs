use std::path::PathBuf;

use thiserror::Error;

pub mod export;

pub use export::{export_report, render_csv, render_json, write_csv, write_json};

/// Output format for a search report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Default file name used when only an output directory is given.
    pub fn default_file_name(self) -> &'static str {
        match self {
            ExportFormat::Json => "search_results.json",
            ExportFormat::Csv => "search_results.csv",
        }
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
