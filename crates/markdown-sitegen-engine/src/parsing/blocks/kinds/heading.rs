/// ATX heading block type, `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses the heading marker on `line`, returning `(level, text after marker)`.
    ///
    /// The marker is 1 to 6 `#` characters followed by exactly one space.
    /// A second space makes the line plain text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let hashes = line.chars().take_while(|&c| c == Self::MARKER).count();
        if hashes == 0 || hashes > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        let text = line[hashes..].strip_prefix(' ')?;
        if text.starts_with(' ') {
            return None;
        }
        Some((hashes as u8, text))
    }

    /// The heading text of a block: marker removed, newlines folded to spaces, trimmed.
    pub fn content(block: &str) -> Option<(u8, String)> {
        let (level, rest) = Self::parse(block)?;
        Some((level, rest.replace('\n', " ").trim().to_string()))
    }
}
