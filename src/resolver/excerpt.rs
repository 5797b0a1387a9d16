//! Excerpt cleanup for index hits.
//!
//! The upstream index returns excerpts with highlight markup baked in. For
//! the compact result list we strip every tag and truncate to a fixed width.

use std::sync::LazyLock;

use regex::Regex;

/// Display width of a cleaned excerpt, in characters.
pub const EXCERPT_MAX_CHARS: usize = 100;

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static pattern"));

/// Strip markup, trim, and truncate to [`EXCERPT_MAX_CHARS`] characters.
/// Truncation counts characters, not bytes, so multi-byte text never splits.
pub fn clean_excerpt(raw: &str) -> String {
    let stripped = MARKUP.replace_all(raw, "");
    stripped.trim().chars().take(EXCERPT_MAX_CHARS).collect()
}
