//! URL normalization.
//!
//! Turns a journey token (absolute URL or bare path) into the lower-cased path
//! form that mapping patterns are matched against.

mod path;

pub use path::{path_component, strip_query_and_fragment};

/// Canonicalizes a URL-like string into a comparable path.
///
/// The input is trimmed and lower-cased, then only its path is kept: scheme,
/// authority, query and fragment are dropped. Text without a scheme is already
/// path-like and only loses a query/fragment suffix. The path itself is not
/// decoded or resolved. Never fails.
///
/// # Examples
///
/// - `normalize("HTTPS://Example.com/Foo/Bar?x=1")` → `"/foo/bar"`
/// - `normalize("/Foo/Bar")` → `"/foo/bar"`
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    path_component(&lowered).to_string()
}
