//! Download file-name sanitization.
//!
//! ## Summary
//! Voter names flow into `Content-Disposition` file names, and header
//! values must stay ASCII. Anything outside ASCII alphanumerics collapses
//! to a single underscore.

/// Reduces `name` to an ASCII-safe file-name stem.
///
/// Runs of non-alphanumeric characters (spaces, punctuation, non-ASCII
/// text) become one `_`; leading and trailing runs are dropped. An empty
/// result falls back to `fallback`.
///
/// Examples:
/// - "Asha Verma" -> "Asha_Verma"
/// - "  N. K. Rao  " -> "N_K_Rao"
#[must_use]
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let stem = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if stem.is_empty() {
        fallback.to_owned()
    } else {
        stem
    }
}
