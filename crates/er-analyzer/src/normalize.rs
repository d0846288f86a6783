//! Text normalization ahead of keyword matching.

use regex::Regex;
use std::sync::LazyLock;

// Anything other than letters, digits, whitespace, apostrophes, hyphens and periods.
static NON_ESSENTIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s'\-.]").expect("static pattern compiles"));

/// Lowercase, blank out non-essential punctuation and collapse whitespace.
///
/// Idempotent; the empty string normalizes to itself.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = NON_ESSENTIAL.replace_all(&lower, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of non-whitespace characters.
pub fn visible_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}
