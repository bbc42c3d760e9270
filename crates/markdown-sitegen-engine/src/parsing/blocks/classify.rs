use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies one block from its text alone.
///
/// Rules are tried in order: heading (first line), fenced code (first and last
/// lines), then quote and both list kinds (every line). Anything else is a
/// paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    let lines: Vec<&str> = block.split('\n').collect();
    let first = lines.first().copied().unwrap_or_default();

    if let Some((level, _)) = Heading::parse(first) {
        return BlockType::Heading(level);
    }
    if CodeFence::is_fenced(&lines) {
        return BlockType::Code;
    }
    if lines.iter().all(|line| BlockQuote::is_quote_line(line)) {
        return BlockType::Quote;
    }
    if UnorderedList::matches(&lines) {
        return BlockType::UnorderedList;
    }
    if OrderedList::matches(&lines) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}
