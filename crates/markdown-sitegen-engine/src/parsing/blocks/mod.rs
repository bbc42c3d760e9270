//! # Block Parsing
//!
//! Two-phase block parsing over a whole document.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed, non-empty blocks
//!
//! 2. **Classification** (`classify`): each block is tagged with a `BlockType`
//!    by pattern inspection of its lines, defaulting to `Paragraph`
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`segment`**: `markdown_to_blocks`
//! - **`classify`**: `block_to_block_type`
//!
//! ## Key Invariants
//!
//! - Classification is a pure function of the block text
//! - Fenced code blocks are raw zones: their content is never inline-parsed
//! - Nothing is rejected; unmatched blocks are paragraphs

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::block_to_block_type;
pub use segment::markdown_to_blocks;
pub use types::BlockType;
