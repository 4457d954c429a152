#![deny(missing_docs)]

//! # Model URL Parsing
//!
//! Splits the combined `url` + `urlParams` string into the server base, the
//! templated path and the optional query, and extracts `{name}` placeholders
//! from the path.

use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

/// `scheme://authority`, then everything up to `?`, then the optional query.
///
/// The authority only admits letters, digits, `.`, `@` and `:`.
const MODEL_URL_PATTERN: &str = r"^(https?://[A-Za-z0-9.@:]+)([^?]*)(\?.*)?$";

/// `{identifier}` where the identifier may hold letters, digits, `_`, `-` and whitespace.
const PLACEHOLDER_PATTERN: &str = r"(?i)\{([a-z0-9_\-\s]+)\}";

/// The three components of a model endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedModelUrl {
    /// `scheme://host[:port]`, emitted as the single server URL.
    pub base: String,
    /// Templated path, used as the `paths` key. May be empty.
    pub path: String,
    /// Query string including the leading `?`.
    pub query: Option<String>,
}

fn model_url_regex() -> &'static Regex {
    static MODEL_URL_RE: OnceLock<Regex> = OnceLock::new();
    MODEL_URL_RE.get_or_init(|| Regex::new(MODEL_URL_PATTERN).expect("Invalid regex constant"))
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE.get_or_init(|| Regex::new(PLACEHOLDER_PATTERN).expect("Invalid regex constant"))
}

/// Decomposes a model endpoint URL.
///
/// # Arguments
///
/// * `url` - The descriptor's `url` with `urlParams` already appended.
///
/// # Errors
///
/// Returns `AppError::MalformedUrl` when the input lacks an `http(s)://` authority.
pub fn parse_model_url(url: &str) -> AppResult<ParsedModelUrl> {
    let caps = model_url_regex()
        .captures(url)
        .ok_or_else(|| AppError::MalformedUrl(url.to_string()))?;

    let base = caps
        .get(1)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| AppError::MalformedUrl(url.to_string()))?;
    let path = caps
        .get(2)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let query = caps.get(3).map(|m| m.as_str().to_string());

    Ok(ParsedModelUrl { base, path, query })
}

/// Returns the distinct placeholder names in `path`, in order of first appearance.
///
/// e.g. `/v1/{model}/predict/{version}` -> `["model", "version"]`
pub fn extract_path_placeholders(path: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in placeholder_regex().captures_iter(path) {
        if let Some(name) = caps.get(1) {
            let name = name.as_str();
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_path_and_query() {
        let parsed =
            parse_model_url("https://api.example.com/v1/predict/{model_id}?debug=true").unwrap();
        assert_eq!(parsed.base, "https://api.example.com");
        assert_eq!(parsed.path, "/v1/predict/{model_id}");
        assert_eq!(parsed.query.as_deref(), Some("?debug=true"));
    }

    #[test]
    fn test_parse_port_and_userinfo() {
        let parsed = parse_model_url("http://user@localhost:5000/predict").unwrap();
        assert_eq!(parsed.base, "http://user@localhost:5000");
        assert_eq!(parsed.path, "/predict");
        assert!(parsed.query.is_none());
    }

    #[test]
    fn test_parse_empty_path() {
        let parsed = parse_model_url("http://127.0.0.1:8080").unwrap();
        assert_eq!(parsed.base, "http://127.0.0.1:8080");
        assert_eq!(parsed.path, "");
    }

    #[test]
    fn test_hyphenated_host_splits_at_hyphen() {
        // '-' is outside the authority alphabet, so the rest of the host
        // lands in the path
        let parsed = parse_model_url("https://my-model.example.com/predict/{id}").unwrap();
        assert_eq!(parsed.base, "https://my");
        assert_eq!(parsed.path, "-model.example.com/predict/{id}");
        assert_eq!(extract_path_placeholders(&parsed.path), vec!["id"]);
    }

    #[test]
    fn test_parse_rejects_missing_scheme() {
        for bad in ["api.example.com/predict", "ftp://host/p", "", "https://"] {
            let err = parse_model_url(bad).unwrap_err();
            assert!(matches!(err, AppError::MalformedUrl(_)), "input: {bad:?}");
        }
    }

    #[test]
    fn test_placeholders_in_order() {
        let names = extract_path_placeholders("/a/{Second}/b/{first-id}/{ spaced name }");
        assert_eq!(names, vec!["Second", "first-id", " spaced name "]);
    }

    #[test]
    fn test_placeholders_are_distinct() {
        let names = extract_path_placeholders("/{id}/x/{id}/{other}");
        assert_eq!(names, vec!["id", "other"]);
    }

    #[test]
    fn test_placeholder_charset() {
        // '.' is outside the identifier alphabet
        assert!(extract_path_placeholders("/{a.b}").is_empty());
        assert!(extract_path_placeholders("/plain/path").is_empty());
    }
}
