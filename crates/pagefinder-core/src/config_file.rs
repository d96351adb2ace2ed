use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub output: Option<OutputConfig>,
    pub search: Option<SearchConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for `search_results.json` / `search_results.csv`.
    pub dir: Option<String>,
    pub json: Option<String>,
    pub csv: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub skip_unreadable: Option<bool>,
}

impl ConfigFile {
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output.as_ref()?.dir.as_ref().map(PathBuf::from)
    }

    pub fn output_json(&self) -> Option<PathBuf> {
        self.output.as_ref()?.json.as_ref().map(PathBuf::from)
    }

    pub fn output_csv(&self) -> Option<PathBuf> {
        self.output.as_ref()?.csv.as_ref().map(PathBuf::from)
    }

    pub fn skip_unreadable(&self) -> Option<bool> {
        self.search.as_ref()?.skip_unreadable
    }
}

/// Platform config directory path: `<config_dir>/pagefinder/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pagefinder").join("config.toml"))
}

/// Load config by cascading CWD `.pagefinder.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".pagefinder.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparsable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let base_out = base.output.unwrap_or_default();
    let over_out = overlay.output.unwrap_or_default();
    let base_search = base.search.unwrap_or_default();
    let over_search = overlay.search.unwrap_or_default();

    ConfigFile {
        output: Some(OutputConfig {
            dir: over_out.dir.or(base_out.dir),
            json: over_out.json.or(base_out.json),
            csv: over_out.csv.or(base_out.csv),
        }),
        search: Some(SearchConfig {
            skip_unreadable: over_search.skip_unreadable.or(base_search.skip_unreadable),
        }),
    }
}
