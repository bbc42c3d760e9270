use crate::parsing::inline::TextKind;

/// Code span inline type with owned delimiter constant.
///
/// Code is the last delimiter pass, so backticks inside bold or italic text
/// are never split again.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const DELIMITER: &'static str = "`";
    pub const KIND: TextKind = TextKind::Code;
}
