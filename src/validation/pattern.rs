//! Search pattern compilation
//!
//! Free text typed into a search box is compiled as a regular expression.
//! Half-typed or malformed patterns are expected, so the `safe_*` entry points
//! swallow compile errors and hand back "no matcher" instead.

use lazy_regex::{Regex, RegexBuilder};
use thiserror::Error;
use tracing::warn;

/// Compile-time options for a search pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternFlags {
    pub case_insensitive: bool,
}

impl Default for PatternFlags {
    fn default() -> Self {
        Self {
            case_insensitive: true,
        }
    }
}

/// A pattern that failed to compile
#[derive(Debug, Clone, Error)]
#[error("Invalid search pattern '{pattern}': {reason}")]
pub struct PatternError {
    pub pattern: String,
    pub reason: String,
}

/// Remove one optional leading and one optional trailing `/`
fn strip_delimiters(pattern: &str) -> &str {
    let pattern = pattern.strip_prefix('/').unwrap_or(pattern);
    pattern.strip_suffix('/').unwrap_or(pattern)
}

/// Compile a search pattern, reporting why it failed
pub fn compile_pattern(pattern: &str, flags: PatternFlags) -> Result<Regex, PatternError> {
    RegexBuilder::new(strip_delimiters(pattern))
        .case_insensitive(flags.case_insensitive)
        .size_limit(1 << 20)
        .build()
        .map_err(|e| PatternError {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

/// Compile case-insensitively; `None` if the pattern is malformed
pub fn safe_regex_compile(pattern: &str) -> Option<Regex> {
    safe_regex_compile_with(pattern, PatternFlags::default())
}

/// Compile with explicit flags; `None` if the pattern is malformed
pub fn safe_regex_compile_with(pattern: &str, flags: PatternFlags) -> Option<Regex> {
    match compile_pattern(pattern, flags) {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Wrap every non-empty match of `query` in `open`/`close` markers
///
/// Returns the text unchanged for an empty or malformed query.
pub fn highlight_matches(text: &str, query: &str, open: &str, close: &str) -> String {
    if query.trim().is_empty() {
        return text.to_string();
    }
    let Some(regex) = safe_regex_compile(query) else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in regex.find_iter(text).filter(|m| !m.as_str().is_empty()) {
        out.push_str(&text[last..m.start()]);
        out.push_str(open);
        out.push_str(m.as_str());
        out.push_str(close);
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiles_case_insensitive_by_default() {
        let regex = safe_regex_compile("lunch").unwrap();
        assert!(regex.is_match("Lunch at cafeteria"));
    }

    #[test]
    fn test_case_sensitive_flag() {
        let flags = PatternFlags {
            case_insensitive: false,
        };
        let regex = safe_regex_compile_with("lunch", flags).unwrap();
        assert!(!regex.is_match("Lunch"));
    }

    #[test]
    fn test_strips_slash_delimiters() {
        let regex = safe_regex_compile("/^bus/").unwrap();
        assert!(regex.is_match("Bus pass"));
        assert!(!regex.is_match("Monthly bus pass"));
        assert_eq!(strip_delimiters("/"), "");
        assert_eq!(strip_delimiters("a/b"), "a/b");
    }

    #[test]
    fn test_malformed_pattern_returns_none() {
        assert!(safe_regex_compile("[").is_none());
        assert!(safe_regex_compile("(unclosed").is_none());
        let err = compile_pattern("[", PatternFlags::default()).unwrap_err();
        assert_eq!(err.pattern, "[");
    }

    #[test]
    fn test_highlight_matches() {
        assert_eq!(
            highlight_matches("Monthly bus pass", "bus", "[", "]"),
            "Monthly [bus] pass"
        );
        assert_eq!(highlight_matches("Food food", "food", "<", ">"), "<Food> <food>");
    }

    #[test]
    fn test_highlight_falls_back_to_plain_text() {
        assert_eq!(highlight_matches("Books", "[", "[", "]"), "Books");
        assert_eq!(highlight_matches("Books", "", "[", "]"), "Books");
        assert_eq!(highlight_matches("Books", "x*", "[", "]"), "Books");
    }
}
