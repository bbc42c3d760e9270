/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// rule matches. Inline parsing is applied to paragraph content.
pub struct Paragraph;

impl Paragraph {
    /// Folds the block onto one line, each newline becoming a single space.
    pub fn content(block: &str) -> String {
        block.replace('\n', " ")
    }
}
