use std::sync::OnceLock;

use regex::Regex;

/// Image inline type, `![alt](url)`.
///
/// The alt text may not contain brackets and the url may not contain parentheses.
/// Both may be empty. There is no escaping.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";

    pub fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }
}
