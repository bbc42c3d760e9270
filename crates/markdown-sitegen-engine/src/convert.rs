//! # Document Assembly
//!
//! Composes segmentation, classification and inline tokenization into one HTML
//! tree rooted at a `div`. Rendering rules live in [`crate::html`]; this module
//! only decides which node each block and span becomes.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::html::{Attributes, HtmlNode, LeafNode, ParentNode, RenderError};
use crate::parsing::{
    ParseOptions, ParsedBlock,
    blocks::{
        BlockType,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    },
    inline::{InlineError, TextKind, TextSpan, text_to_textnodes_with},
    parse_document,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Document has no content blocks")]
    EmptyDocument,
    #[error("No level 1 heading found")]
    NoTitleFound,
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Converts a markdown document into an HTML tree using the default options.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ConvertError> {
    markdown_to_html_node_with(markdown, &ParseOptions::default())
}

/// Converts a markdown document into an HTML tree.
///
/// # Returns
/// A `div` parent with one child per block, or [`ConvertError::EmptyDocument`]
/// when the document has no blocks.
pub fn markdown_to_html_node_with(
    markdown: &str,
    options: &ParseOptions,
) -> Result<HtmlNode, ConvertError> {
    let doc = parse_document(markdown);
    if doc.blocks.is_empty() {
        return Err(ConvertError::EmptyDocument);
    }

    let children = doc
        .blocks
        .iter()
        .map(|block| block_to_html_node(block, options))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParentNode::new("div", children).into())
}

/// Converts and renders a markdown document using the default options.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    markdown_to_html_with(markdown, &ParseOptions::default())
}

pub fn markdown_to_html_with(markdown: &str, options: &ParseOptions) -> Result<String, ConvertError> {
    Ok(markdown_to_html_node_with(markdown, options)?.to_html()?)
}

/// Returns the text of the first level 1 heading.
pub fn extract_title(markdown: &str) -> Result<String, ConvertError> {
    parse_document(markdown)
        .blocks
        .iter()
        .filter(|block| block.kind == BlockType::Heading(1))
        .find_map(|block| Heading::content(&block.text))
        .map(|(_, text)| text)
        .ok_or(ConvertError::NoTitleFound)
}

/// Converts one classified block into its parent node.
pub fn block_to_html_node(
    block: &ParsedBlock,
    options: &ParseOptions,
) -> Result<HtmlNode, ConvertError> {
    let text = block.text.as_str();
    let node = match block.kind {
        BlockType::Heading(level) => {
            let content = Heading::content(text)
                .map(|(_, content)| content)
                .unwrap_or_default();
            ParentNode::new(format!("h{level}"), inline_children(&content, options)?)
        }
        BlockType::Code => {
            let body = encode_text(&CodeFence::body(text)).into_owned();
            let code = ParentNode::new("code", vec![LeafNode::text(body).into()]);
            ParentNode::new("pre", vec![code.into()])
        }
        BlockType::Quote => ParentNode::new(
            "blockquote",
            inline_children(&BlockQuote::content(text), options)?,
        ),
        BlockType::UnorderedList => {
            ParentNode::new("ul", list_items(UnorderedList::items(text), options)?)
        }
        BlockType::OrderedList => {
            ParentNode::new("ol", list_items(OrderedList::items(text), options)?)
        }
        BlockType::Paragraph => {
            ParentNode::new("p", inline_children(&Paragraph::content(text), options)?)
        }
    };
    Ok(node.into())
}

/// Converts one inline span into a leaf node.
pub fn text_node_to_html_node(span: &TextSpan) -> HtmlNode {
    let url = span.url.as_deref().unwrap_or_default();
    let leaf = match span.kind {
        TextKind::Plain => LeafNode::text(&span.text),
        TextKind::Bold => LeafNode::tagged("b", &span.text),
        TextKind::Italic => LeafNode::tagged("i", &span.text),
        TextKind::Code => LeafNode::tagged("code", encode_text(&span.text)),
        TextKind::Link => LeafNode::tagged("a", &span.text).with_attrs(
            Attributes::new().with("href", encode_double_quoted_attribute(url)),
        ),
        TextKind::Image => LeafNode::tagged("img", "").with_attrs(
            Attributes::new()
                .with("src", encode_double_quoted_attribute(url))
                .with("alt", encode_double_quoted_attribute(&span.text)),
        ),
    };
    leaf.into()
}

fn inline_children(text: &str, options: &ParseOptions) -> Result<Vec<HtmlNode>, ConvertError> {
    let spans = text_to_textnodes_with(text, options)?;
    Ok(spans.iter().map(text_node_to_html_node).collect())
}

fn list_items(items: Vec<&str>, options: &ParseOptions) -> Result<Vec<HtmlNode>, ConvertError> {
    items
        .into_iter()
        .map(|item| Ok(ParentNode::new("li", inline_children(item, options)?).into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html(md: &str) -> String {
        markdown_to_html_node(md).unwrap().to_html().unwrap()
    }

    #[test]
    fn paragraph() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

";
        assert_eq!(
            html(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p></div>"
        );
    }

    #[test]
    fn paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
        assert_eq!(
            html(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn lists() {
        let md = "
- This is a list
- with items
- and _more_ items

1. This is an `ordered` list
2. with items
3. and more items

";
        assert_eq!(
            html(md),
            "<div><ul><li>This is a list</li><li>with items</li><li>and <i>more</i> items</li></ul><ol><li>This is an <code>ordered</code> list</li><li>with items</li><li>and more items</li></ol></div>"
        );
    }

    #[test]
    fn headings() {
        let md = "
# this is an h1

this is paragraph text

## this is an h2
";
        assert_eq!(
            html(md),
            "<div><h1>this is an h1</h1><p>this is paragraph text</p><h2>this is an h2</h2></div>"
        );
    }

    #[test]
    fn blockquote() {
        let md = "
> This is a
> blockquote block

this is paragraph text

";
        assert_eq!(
            html(md),
            "<div><blockquote>This is a blockquote block</blockquote><p>this is paragraph text</p></div>"
        );
    }

    #[test]
    fn codeblock_is_not_inline_parsed() {
        let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
        assert_eq!(
            html(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn codeblock_escapes_markup() {
        assert_eq!(
            html("```html\n<p>a & b</p>\n```"),
            "<div><pre><code>&lt;p&gt;a &amp; b&lt;/p&gt;\n</code></pre></div>"
        );
    }

    #[test]
    fn links_and_images() {
        assert_eq!(
            html("A [link](/about) and ![logo](/logo.png)"),
            r#"<div><p>A <a href="/about">link</a> and <img src="/logo.png" alt="logo"></p></div>"#
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        assert_eq!(
            html("[q](/search?a=1&b=2)"),
            r#"<div><p><a href="/search?a=1&amp;b=2">q</a></p></div>"#
        );
    }

    #[test]
    fn span_conversion_covers_every_kind() {
        let cases = [
            (TextSpan::plain("t"), "t"),
            (TextSpan::new("b", TextKind::Bold), "<b>b</b>"),
            (TextSpan::new("i", TextKind::Italic), "<i>i</i>"),
            (TextSpan::new("c", TextKind::Code), "<code>c</code>"),
            (TextSpan::link("l", "/u"), r#"<a href="/u">l</a>"#),
            (TextSpan::image("alt", "/p.png"), r#"<img src="/p.png" alt="alt">"#),
        ];
        for (span, expected) in cases {
            assert_eq!(text_node_to_html_node(&span).to_html().unwrap(), expected);
        }
    }

    #[test]
    fn empty_document_is_an_error() {
        assert_eq!(markdown_to_html_node(""), Err(ConvertError::EmptyDocument));
        assert_eq!(
            markdown_to_html_node("  \n\n \n"),
            Err(ConvertError::EmptyDocument)
        );
    }

    #[test]
    fn empty_list_item_fails_to_render() {
        let err = markdown_to_html("1. one\n2. \n3. three").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Render(RenderError::MissingValue { tag: None })
        ));
    }

    #[test]
    fn strict_options_propagate_inline_errors() {
        let err = markdown_to_html_with("a **b", &ParseOptions::strict()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Inline(InlineError::UnbalancedDelimiter { .. })
        ));
    }

    #[test]
    fn rendering_is_deterministic() {
        let md = "# T\n\n- a\n- **b**\n\n> q\n\n```\nx\n```";
        assert_eq!(markdown_to_html(md).unwrap(), markdown_to_html(md).unwrap());
    }

    #[test]
    fn extract_title_finds_first_h1() {
        let md = "## not this\n\n# Tolkien Fan Club\n\n# Second";
        assert_eq!(extract_title(md).unwrap(), "Tolkien Fan Club");
    }

    #[test]
    fn extract_title_trims_whitespace() {
        assert_eq!(extract_title("# Spaced out   ").unwrap(), "Spaced out");
    }

    #[test]
    fn extract_title_ignores_wide_marker_gap() {
        assert_eq!(
            extract_title("#   Not a title

# Real title").unwrap(),
            "Real title"
        );
    }

    #[test]
    fn extract_title_missing() {
        assert_eq!(
            extract_title("## only h2\n\ntext"),
            Err(ConvertError::NoTitleFound)
        );
    }
}
