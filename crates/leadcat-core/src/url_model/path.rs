//! Raw path extraction from URL-like references.
//!
//! Splits `scheme:` and `//authority` off the front and `?query` / `#fragment`
//! off the back. Nothing in between is decoded, re-encoded or resolved, so the
//! path text is exactly what appeared in the journey.

/// Returns the path component of `reference`.
///
/// - `https://site.com/a/b?x=1` → `/a/b`
/// - `//site.com/a` → `/a`
/// - `/a/b#top` → `/a/b`
/// - `https://site.com` → `` (no path)
pub fn path_component(reference: &str) -> &str {
    let rest = strip_scheme(reference);
    let rest = match rest.strip_prefix("//") {
        Some(after) => &after[authority_len(after)..],
        None => rest,
    };
    strip_query_and_fragment(rest)
}

/// Drops a trailing `?query` and/or `#fragment`.
pub fn strip_query_and_fragment(reference: &str) -> &str {
    match reference.find(|c: char| c == '?' || c == '#') {
        Some(idx) => &reference[..idx],
        None => reference,
    }
}

/// Everything after `scheme:` when the text before the first `:` is a valid
/// scheme (a letter followed by letters, digits, `+`, `-` or `.`).
fn strip_scheme(reference: &str) -> &str {
    let Some((scheme, rest)) = reference.split_once(':') else {
        return reference;
    };
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid {
        rest
    } else {
        reference
    }
}

/// Byte length of the authority: up to the first `/`, `?` or `#`.
fn authority_len(after_slashes: &str) -> usize {
    after_slashes
        .find(|c: char| c == '/' || c == '?' || c == '#')
        .unwrap_or(after_slashes.len())
}
