//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! ## Types
//!
//! - **`Image`**: `![alt](url)` pattern
//! - **`Link`**: `[text](url)` pattern, never preceded by `!`
//! - **`Bold`**: `DELIMITER = "**"`
//! - **`Italic`**: `DELIMITER = "_"`
//! - **`CodeSpan`**: `DELIMITER = "`"`
//!
//! ## Design Principle
//!
//! All delimiters and patterns live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use image::Image;
pub use link::Link;
