//! # Inline Parsing
//!
//! Multi-pass splitting of inline markdown into typed [`TextSpan`]s.
//!
//! ## Architecture
//!
//! Inline parsing runs over the text of a single block after its block-level
//! markers have been removed. It never sees headings, fences or list markers.
//!
//! Each pass takes the whole span sequence and only splits spans that are still
//! plain:
//! 1. images `![alt](url)`
//! 2. links `[text](url)`
//! 3. `**bold**`
//! 4. `_italic_`
//! 5. `` `code` ``
//!
//! The order is part of the output contract. A later pass never re-splits text
//! an earlier pass has already claimed.
//!
//! ## Modules
//!
//! - **`types`**: `TextKind` and `TextSpan`
//! - **`kinds`**: Inline-specific types with owned delimiters and patterns
//! - **`extract`**: regex-driven image and link extraction
//! - **`delimiter`**: `split_nodes_delimiter` and `DelimiterPolicy`
//! - **`parser`**: `text_to_textnodes()` main entry point

pub mod delimiter;
pub mod extract;
pub mod kinds;
pub mod parser;
pub mod types;

pub use delimiter::{DelimiterPolicy, split_nodes_delimiter};
pub use extract::{
    extract_markdown_images, extract_markdown_links, split_nodes_image, split_nodes_link,
};
pub use parser::{text_to_textnodes, text_to_textnodes_with};
pub use types::{TextKind, TextSpan};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("Unbalanced delimiter `{delimiter}` in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },
    #[error("Invalid span kind: {0}")]
    InvalidSpanKind(String),
}
