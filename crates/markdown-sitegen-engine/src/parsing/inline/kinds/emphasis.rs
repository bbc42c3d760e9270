use crate::parsing::inline::TextKind;

/// Strong emphasis, `**bold**`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
    pub const KIND: TextKind = TextKind::Bold;
}

/// Emphasis, `_italic_`.
///
/// Only underscores are recognised; a single `*` is plain text.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "_";
    pub const KIND: TextKind = TextKind::Italic;
}
