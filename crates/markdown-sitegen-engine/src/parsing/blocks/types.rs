/// The kind of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Default when no other rule matches.
    Paragraph,
    /// An ATX heading, level 1 to 6.
    Heading(u8),
    /// A block fenced by ``` lines.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
}
