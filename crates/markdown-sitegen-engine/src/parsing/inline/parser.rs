use crate::parsing::ParseOptions;

use super::{
    InlineError,
    delimiter::split_nodes_delimiter,
    extract::{split_nodes_image, split_nodes_link},
    kinds::{Bold, CodeSpan, Italic},
    types::TextSpan,
};

/// Tokenizes inline markdown with the default options.
///
/// Never fails under the default permissive delimiter policy.
pub fn text_to_textnodes(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    text_to_textnodes_with(text, &ParseOptions::default())
}

/// Tokenizes inline markdown into an ordered sequence of spans.
///
/// # Pass Order
/// Images, links, bold, italic, code. Each pass only splits spans that are still
/// plain, so `**_x_**` is bold text `_x_` and `` `**x**` `` is plain text holding
/// a bold `x` between backticks.
///
/// # Returns
/// Spans with whitespace-only text removed. An input that leaves nothing behind
/// yields a single empty plain span.
pub fn text_to_textnodes_with(
    text: &str,
    options: &ParseOptions,
) -> Result<Vec<TextSpan>, InlineError> {
    let policy = options.delimiters;

    let spans = vec![TextSpan::plain(text)];
    let spans = split_nodes_image(spans);
    let spans = split_nodes_link(spans);
    let spans = split_nodes_delimiter(spans, Bold::DELIMITER, Bold::KIND, policy)?;
    let spans = split_nodes_delimiter(spans, Italic::DELIMITER, Italic::KIND, policy)?;
    let mut spans = split_nodes_delimiter(spans, CodeSpan::DELIMITER, CodeSpan::KIND, policy)?;

    spans.retain(|span| !span.is_blank());
    if spans.is_empty() {
        spans.push(TextSpan::plain(""));
    }
    Ok(spans)
}
