//! Text normalizer: canonical single-spaced text

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII whitespace plus the ideographic space (U+3000)
    static ref RE_WHITESPACE: Regex = Regex::new(r"[\s\u{3000}]+").unwrap();
}

/// Collapse every whitespace run to one ASCII space and trim both ends
pub fn normalize(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").trim().to_string()
}
