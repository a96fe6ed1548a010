//! Journey parsing: pull URL-like tokens out of a loosely structured field.
//!
//! Journey columns come from exports that serialize a list of page visits,
//! either as full URLs (`['https://site.com/a', ...]`) or as bare paths
//! (`['/a', '/b']`). No schema is assumed; tokens are found by pattern.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Display;

/// `scheme://` followed by anything up to whitespace, a comma, a bracket or a quote.
static FULL_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[A-Za-z][A-Za-z0-9+.\-]*://[^\s,'"\[\]]+"#).unwrap());

/// `/` followed by path characters.
static BARE_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"/[A-Za-z0-9\-/_]+").unwrap());

/// Extracts URL-like tokens from a raw journey field, in order of appearance.
///
/// Full URLs win: bare paths are only looked for when the field contains no
/// full URL at all, so the path segments of a full URL are never reported
/// twice. A field with neither yields an empty vector.
pub fn parse(raw: &str) -> Vec<String> {
    let urls = find_all(&FULL_URL, raw);
    if !urls.is_empty() {
        return urls;
    }
    find_all(&BARE_PATH, raw)
}

/// [`parse`] for any displayable value (numbers, missing markers, ...).
pub fn parse_value<T: Display + ?Sized>(raw: &T) -> Vec<String> {
    parse(&raw.to_string())
}

fn find_all(re: &Regex, haystack: &str) -> Vec<String> {
    re.find_iter(haystack).map(|m| m.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_urls_in_serialized_list() {
        assert_eq!(
            parse("['https://site.com/a','https://site.com/b']"),
            vec!["https://site.com/a", "https://site.com/b"]
        );
    }

    #[test]
    fn full_urls_with_spaces_and_double_quotes() {
        assert_eq!(
            parse(r#"["http://x.com/one?p=1", "https://x.com/two"]"#),
            vec!["http://x.com/one?p=1", "https://x.com/two"]
        );
    }

    #[test]
    fn bare_paths_when_no_full_urls() {
        assert_eq!(parse("['/a','/b']"), vec!["/a", "/b"]);
        assert_eq!(
            parse("/listings/condo-x_1 then /search"),
            vec!["/listings/condo-x_1", "/search"]
        );
    }

    #[test]
    fn full_urls_suppress_path_fallback() {
        // The trailing bare path is ignored once any full URL is present.
        assert_eq!(
            parse("['https://site.com/a', '/b']"),
            vec!["https://site.com/a"]
        );
    }

    #[test]
    fn nothing_recognizable() {
        assert!(parse("no urls here").is_empty());
        assert!(parse("").is_empty());
        assert!(parse("[]").is_empty());
        assert!(parse("/").is_empty());
    }

    #[test]
    fn other_schemes_are_urls() {
        assert_eq!(parse("ftp://files.site.com/x"), vec!["ftp://files.site.com/x"]);
    }

    #[test]
    fn display_values_are_stringified() {
        assert!(parse_value(&42).is_empty());
        assert!(parse_value(&f64::NAN).is_empty());
        assert_eq!(parse_value("/a"), vec!["/a"]);
    }
}
