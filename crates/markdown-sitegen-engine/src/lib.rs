pub mod convert;
pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{
    ConvertError, extract_title, markdown_to_html, markdown_to_html_node,
    markdown_to_html_node_with, markdown_to_html_with,
};
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode, RenderError};
pub use parsing::{
    ParseOptions,
    blocks::{BlockType, block_to_block_type, markdown_to_blocks},
    inline::{DelimiterPolicy, InlineError, TextKind, TextSpan, text_to_textnodes},
};
pub use site::{BuildReport, PageError, PageFailure, SiteError, SiteLayout, Template, build_site};
