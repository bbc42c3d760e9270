use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Link inline type, `[text](url)`.
///
/// The `regex` crate has no lookbehind, so the pattern captures an optional
/// leading `!` and callers reject matches where it is present. A match that
/// starts with `!` is image syntax and is never a link.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)";

    pub fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }

    /// Returns `(text, url)` when the captures are a link rather than an image.
    pub fn parts<'t>(caps: &Captures<'t>) -> Option<(&'t str, &'t str)> {
        let bang = caps.get(1).map_or("", |m| m.as_str());
        if !bang.is_empty() {
            return None;
        }
        let text = caps.get(2)?.as_str();
        let url = caps.get(3)?.as_str();
        Some((text, url))
    }
}
