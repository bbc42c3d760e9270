use std::fmt;
use std::str::FromStr;

use super::InlineError;

/// The semantic kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl TextKind {
    pub const ALL: [TextKind; 6] = [
        TextKind::Plain,
        TextKind::Bold,
        TextKind::Italic,
        TextKind::Code,
        TextKind::Link,
        TextKind::Image,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextKind::Plain => "text",
            TextKind::Bold => "bold",
            TextKind::Italic => "italic",
            TextKind::Code => "code",
            TextKind::Link => "link",
            TextKind::Image => "image",
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextKind {
    type Err = InlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" | "plain" => Ok(TextKind::Plain),
            "bold" => Ok(TextKind::Bold),
            "italic" => Ok(TextKind::Italic),
            "code" => Ok(TextKind::Code),
            "link" => Ok(TextKind::Link),
            "image" => Ok(TextKind::Image),
            other => Err(InlineError::InvalidSpanKind(other.to_string())),
        }
    }
}

/// A typed unit of inline content.
///
/// `url` is only set for links and images. `None` and `Some("")` are distinct,
/// so two spans compare equal only when kind, text and url all match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub kind: TextKind,
    /// Visible text; the alt text for images.
    pub text: String,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: TextKind) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, kind: TextKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(text, TextKind::Link, url)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(alt, TextKind::Image, url)
    }

    /// True when the text is non-empty and made only of whitespace.
    pub fn is_blank(&self) -> bool {
        !self.text.is_empty() && self.text.trim().is_empty()
    }
}
