use std::sync::OnceLock;

use regex::Regex;

/// Splits a document into blocks.
///
/// A run of one or more blank (empty or whitespace-only) lines separates blocks.
/// Each block is trimmed; empty blocks are dropped. CRLF line endings are
/// normalised to LF first so the classifier only ever sees `\n`.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    static BLANK_LINES: OnceLock<Regex> = OnceLock::new();
    let separator =
        BLANK_LINES.get_or_init(|| Regex::new(r"\n\s*\n").expect("Invalid blank line regex"));

    let normalized = markdown.replace("\r\n", "\n");
    separator
        .split(&normalized)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}
