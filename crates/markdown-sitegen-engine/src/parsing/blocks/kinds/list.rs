/// Unordered list block type, one `- item` per line.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn matches(lines: &[&str]) -> bool {
        !lines.is_empty() && lines.iter().all(|line| line.starts_with(Self::MARKER))
    }

    /// Item texts with the marker removed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line))
            .collect()
    }
}

/// Ordered list block type, `1. first`, `2. second`, ...
///
/// Numbering must start at 1 and increase by exactly one per line.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// Strips the `n. ` marker from `line` when it carries exactly that number.
    pub fn strip_marker(line: &str, n: usize) -> Option<&str> {
        line.strip_prefix(n.to_string().as_str())?
            .strip_prefix(Self::SEPARATOR)
    }

    pub fn matches(lines: &[&str]) -> bool {
        !lines.is_empty()
            && lines
                .iter()
                .enumerate()
                .all(|(i, line)| Self::strip_marker(line, i + 1).is_some())
    }

    /// Item texts with the markers removed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .enumerate()
            .map(|(i, line)| Self::strip_marker(line, i + 1).unwrap_or(line))
            .collect()
    }
}
