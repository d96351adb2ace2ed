use regex::{Regex, RegexBuilder};

use crate::CoreError;

/// Case-insensitive literal substring matcher for one keyword.
///
/// The keyword is escaped before compilation, so regex metacharacters in
/// it match themselves.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keyword: String,
    pattern: Regex,
}

impl KeywordMatcher {
    pub fn new(keyword: &str) -> Result<Self, CoreError> {
        let pattern = RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
            .map_err(|source| CoreError::Matcher {
                keyword: keyword.to_string(),
                source,
            })?;
        Ok(Self {
            keyword: keyword.to_string(),
            pattern,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Whether the keyword occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let m = KeywordMatcher::new("invoice").unwrap();
        assert!(m.is_match("INVOICE #42"));
        assert!(m.is_match("Your Invoice is attached"));
        assert!(!m.is_match("receipt"));
    }

    #[test]
    fn test_substring_not_whole_word() {
        let m = KeywordMatcher::new("voice").unwrap();
        assert!(m.is_match("invoices"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let m = KeywordMatcher::new("a.b").unwrap();
        assert!(m.is_match("see A.B here"));
        assert!(!m.is_match("axb"));

        let m = KeywordMatcher::new("C++ (v2)?").unwrap();
        assert!(m.is_match("built with c++ (V2)? yes"));
        assert!(!m.is_match("c (v2)"));

        let m = KeywordMatcher::new("[draft]*").unwrap();
        assert!(m.is_match("Title [DRAFT]*"));
        assert!(!m.is_match("d"));
    }

    #[test]
    fn test_unicode_case_folding() {
        let m = KeywordMatcher::new("größe").unwrap();
        assert!(m.is_match("Die GRÖßE"));

        let m = KeywordMatcher::new("ΣΟΦΙΑ").unwrap();
        assert!(m.is_match("η σοφια"));
    }

    #[test]
    fn test_keyword_spanning_line_break_does_not_match() {
        let m = KeywordMatcher::new("total due").unwrap();
        assert!(!m.is_match("total\ndue"));
    }
}
