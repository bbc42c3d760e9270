//! # HTML Node Model
//!
//! The output tree produced by the document assembler and its rendering contract.
//!
//! ## Modules
//!
//! - **`attributes`**: `Attributes`, an insertion-ordered `key="value"` mapping
//! - **`node`**: `HtmlNode` with its `LeafNode` and `ParentNode` variants
//!
//! ## Rendering Rules
//!
//! - A leaf without a tag renders its raw value. Escaping is the caller's job.
//! - A leaf with a tag renders `<tag attrs>value</tag>`; void elements such as
//!   `img` render as `<img attrs>` and carry no value.
//! - A parent renders `<tag attrs>` + children + `</tag>`.
//! - Every other shape is a [`RenderError`]; no partial output is returned.

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode};

/// Structural violations detected while rendering a node tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Leaf node {} has no value", describe_tag(.tag))]
    MissingValue { tag: Option<String> },
    #[error("Parent node has no tag")]
    MissingTag,
    #[error("Parent node <{tag}> has no children")]
    EmptyChildren { tag: String },
}

fn describe_tag(tag: &Option<String>) -> String {
    match tag {
        Some(tag) => format!("<{tag}>"),
        None => "(untagged)".to_string(),
    }
}
