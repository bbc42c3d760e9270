/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips the `>` prefix and at most one following space.
    ///
    /// Lines without the prefix are returned unchanged.
    pub fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }

    /// Joins the stripped lines of a quote block with single spaces.
    pub fn content(block: &str) -> String {
        block
            .split('\n')
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
