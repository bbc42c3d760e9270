pub mod blocks;
pub mod inline;

use blocks::{BlockType, block_to_block_type, markdown_to_blocks};
use inline::DelimiterPolicy;

/// Knobs that change how markdown is tokenized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub delimiters: DelimiterPolicy,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            delimiters: DelimiterPolicy::Strict,
        }
    }
}

/// A segmented block together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBlock {
    pub kind: BlockType,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct ParsedDoc {
    pub blocks: Vec<ParsedBlock>,
}

/// Segments a document into blocks and classifies each one.
pub fn parse_document(markdown: &str) -> ParsedDoc {
    let blocks = markdown_to_blocks(markdown)
        .into_iter()
        .map(|text| ParsedBlock {
            kind: block_to_block_type(&text),
            text,
        })
        .collect();

    ParsedDoc { blocks }
}
