use std::path::PathBuf;

use pagefinder_core::ScanOptions;
use pagefinder_core::config_file::ConfigFile;
use pagefinder_reporting::ExportFormat;

use crate::Cli;
use crate::output::ColorMode;

/// Environment variable supplying a default `--output-dir`.
pub const OUTPUT_DIR_ENV: &str = "PAGEFINDER_OUTPUT_DIR";

/// Effective run settings after merging flags, environment and config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub json_path: PathBuf,
    /// `None` means no CSV is written.
    pub csv_path: Option<PathBuf>,
    pub scan_options: ScanOptions,
    pub color: ColorMode,
}

impl Settings {
    /// Resolve configuration: CLI flags > env vars > config file > defaults.
    ///
    /// An explicit file path beats an output directory at the same level.
    pub fn resolve(
        cli: &Cli,
        env_output_dir: Option<PathBuf>,
        config: &ConfigFile,
        use_color: bool,
    ) -> Self {
        let in_dir = |dir: PathBuf, format: ExportFormat| dir.join(format.default_file_name());

        let json_path = cli
            .output
            .clone()
            .or_else(|| cli.output_dir.clone().map(|d| in_dir(d, ExportFormat::Json)))
            .or_else(|| env_output_dir.clone().map(|d| in_dir(d, ExportFormat::Json)))
            .or_else(|| config.output_json())
            .or_else(|| config.output_dir().map(|d| in_dir(d, ExportFormat::Json)))
            .unwrap_or_else(|| PathBuf::from(ExportFormat::Json.default_file_name()));

        let csv_path = cli
            .output_csv
            .clone()
            .or_else(|| cli.output_dir.clone().map(|d| in_dir(d, ExportFormat::Csv)))
            .or_else(|| env_output_dir.map(|d| in_dir(d, ExportFormat::Csv)))
            .or_else(|| config.output_csv())
            .or_else(|| config.output_dir().map(|d| in_dir(d, ExportFormat::Csv)));

        let skip_unreadable = cli.skip_unreadable || config.skip_unreadable().unwrap_or(false);

        Self {
            json_path,
            csv_path,
            scan_options: ScanOptions { skip_unreadable },
            color: ColorMode(use_color && !cli.no_color),
        }
    }
}
