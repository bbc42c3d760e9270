use regex::{Captures, Regex};

use super::{
    kinds::{Image, Link},
    types::{TextKind, TextSpan},
};

/// Returns every `(alt, url)` pair for image syntax in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    Image::regex()
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Returns every `(text, url)` pair for link syntax in `text`, skipping images.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    Link::regex()
        .captures_iter(text)
        .filter_map(|caps| Link::parts(&caps).map(|(t, u)| (t.to_string(), u.to_string())))
        .collect()
}

/// Splits image syntax out of every plain span.
pub fn split_nodes_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_plain_spans(spans, Image::regex(), |caps| {
        Some(TextSpan::image(&caps[1], &caps[2]))
    })
}

/// Splits link syntax out of every plain span. Image syntax is left untouched.
pub fn split_nodes_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_plain_spans(spans, Link::regex(), |caps| {
        Link::parts(caps).map(|(text, url)| TextSpan::link(text, url))
    })
}

/// Splits each plain span around the tokens accepted by `token`.
///
/// Fragments between tokens become plain spans unless empty or whitespace-only.
/// A span with no accepted token passes through unchanged, as do non-plain spans.
fn split_plain_spans<F>(spans: Vec<TextSpan>, pattern: &Regex, token: F) -> Vec<TextSpan>
where
    F: Fn(&Captures<'_>) -> Option<TextSpan>,
{
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if span.kind != TextKind::Plain {
            out.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut pieces = Vec::new();
        let mut last = 0;

        for caps in pattern.captures_iter(text) {
            let Some(node) = token(&caps) else {
                continue;
            };
            let whole = caps.get_match();
            push_fragment(&mut pieces, &text[last..whole.start()]);
            pieces.push(node);
            last = whole.end();
        }

        if pieces.is_empty() {
            out.push(span);
            continue;
        }
        push_fragment(&mut pieces, &text[last..]);
        out.extend(pieces);
    }

    out
}

fn push_fragment(out: &mut Vec<TextSpan>, fragment: &str) {
    if !fragment.trim().is_empty() {
        out.push(TextSpan::plain(fragment));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn extract_single_image() {
        let matches = extract_markdown_images(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)",
        );
        assert_eq!(
            matches,
            pairs(&[("image", "https://i.imgur.com/zjjcJKZ.png")])
        );
    }

    #[test]
    fn extract_multiple_images() {
        let matches = extract_markdown_images("![one](a.png) and ![two](b.png)");
        assert_eq!(matches, pairs(&[("one", "a.png"), ("two", "b.png")]));
    }

    #[test]
    fn extract_image_with_empty_parts() {
        assert_eq!(extract_markdown_images("![]()"), pairs(&[("", "")]));
    }

    #[test]
    fn extract_links() {
        let matches = extract_markdown_links(
            "This is text with a link [to boot dev](https://www.boot.dev) and [to youtube](https://www.youtube.com/@bootdotdev)",
        );
        assert_eq!(
            matches,
            pairs(&[
                ("to boot dev", "https://www.boot.dev"),
                ("to youtube", "https://www.youtube.com/@bootdotdev"),
            ])
        );
    }

    #[test]
    fn extract_links_ignores_images() {
        assert!(extract_markdown_links("![image](url)").is_empty());
    }

    #[test]
    fn extract_links_next_to_images() {
        let matches = extract_markdown_links("![img](a.png)[link](b.html)");
        assert_eq!(matches, pairs(&[("link", "b.html")]));
    }

    #[test]
    fn split_images() {
        let spans = split_nodes_image(vec![TextSpan::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )]);
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is text with an "),
                TextSpan::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                TextSpan::plain(" and another "),
                TextSpan::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn split_links() {
        let spans = split_nodes_link(vec![TextSpan::plain(
            "This is text with a link [to boot dev](https://www.boot.dev) and [to youtube](https://www.youtube.com/@bootdotdev)",
        )]);
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is text with a link "),
                TextSpan::link("to boot dev", "https://www.boot.dev"),
                TextSpan::plain(" and "),
                TextSpan::link("to youtube", "https://www.youtube.com/@bootdotdev"),
            ]
        );
    }

    #[test]
    fn split_drops_whitespace_between_tokens() {
        let spans = split_nodes_link(vec![TextSpan::plain("[a](1)   [b](2)")]);
        assert_eq!(spans, vec![TextSpan::link("a", "1"), TextSpan::link("b", "2")]);
    }

    #[test]
    fn split_without_tokens_passes_span_through() {
        let span = TextSpan::plain("no links here");
        assert_eq!(split_nodes_link(vec![span.clone()]), vec![span]);
    }

    #[test]
    fn split_leaves_non_plain_spans_alone() {
        let bold = TextSpan::new("[not](split)", TextKind::Bold);
        assert_eq!(split_nodes_link(vec![bold.clone()]), vec![bold]);
    }

    #[test]
    fn link_split_never_produces_images() {
        let spans = split_nodes_link(vec![TextSpan::plain("![image](a.png) then [link](b)")]);
        assert!(spans.iter().all(|s| s.kind != TextKind::Image));
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("![image](a.png) then "),
                TextSpan::link("link", "b"),
            ]
        );
    }
}
