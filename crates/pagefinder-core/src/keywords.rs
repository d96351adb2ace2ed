use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::CoreError;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n,]+").unwrap());

/// Load the keyword list from a text file.
///
/// Keywords are separated by line breaks (`\n`, `\r\n` or a lone `\r`)
/// and/or commas. Surrounding whitespace is trimmed and empty entries are
/// dropped. Duplicates are kept.
pub fn load_keywords(path: &Path) -> Result<Vec<String>, CoreError> {
    let text = std::fs::read_to_string(path).map_err(|source| CoreError::KeywordsFile {
        path: path.to_path_buf(),
        source,
    })?;
    let keywords = parse_keywords(&text);
    tracing::debug!(path = %path.display(), count = keywords.len(), "loaded keywords");
    Ok(keywords)
}

/// Split raw keyword-file text into trimmed, non-empty keywords.
pub fn parse_keywords(text: &str) -> Vec<String> {
    SEPARATORS
        .split(text)
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
