use super::{
    InlineError,
    types::{TextKind, TextSpan},
};

/// What to do when a plain span holds an odd number of delimiters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DelimiterPolicy {
    /// The piece after the last delimiter takes the target kind.
    #[default]
    Permissive,
    /// Fail with [`InlineError::UnbalancedDelimiter`].
    Strict,
}

/// Splits every plain span on `delimiter`.
///
/// Pieces at even positions stay plain and pieces at odd positions become `kind`.
/// Empty pieces are dropped. Non-plain spans and spans without the delimiter pass
/// through unchanged.
pub fn split_nodes_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: TextKind,
    policy: DelimiterPolicy,
) -> Result<Vec<TextSpan>, InlineError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if span.kind != TextKind::Plain || !span.text.contains(delimiter) {
            out.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        // n delimiters give n + 1 pieces; an even piece count means an unpaired delimiter.
        if pieces.len() % 2 == 0 && policy == DelimiterPolicy::Strict {
            return Err(InlineError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if i % 2 == 0 { TextKind::Plain } else { kind };
            out.push(TextSpan::new(piece, piece_kind));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn split(text: &str, delimiter: &str, kind: TextKind) -> Vec<TextSpan> {
        split_nodes_delimiter(
            vec![TextSpan::plain(text)],
            delimiter,
            kind,
            DelimiterPolicy::Permissive,
        )
        .unwrap()
    }

    #[test]
    fn split_code() {
        assert_eq!(
            split("This is text with a `code block` word", "`", TextKind::Code),
            vec![
                TextSpan::plain("This is text with a "),
                TextSpan::new("code block", TextKind::Code),
                TextSpan::plain(" word"),
            ]
        );
    }

    #[test]
    fn split_bold_twice() {
        assert_eq!(
            split("**one** and **two**", "**", TextKind::Bold),
            vec![
                TextSpan::new("one", TextKind::Bold),
                TextSpan::plain(" and "),
                TextSpan::new("two", TextKind::Bold),
            ]
        );
    }

    #[test]
    fn missing_delimiter_passes_through() {
        assert_eq!(
            split("nothing to see", "_", TextKind::Italic),
            vec![TextSpan::plain("nothing to see")]
        );
    }

    #[test]
    fn non_plain_spans_are_not_split() {
        let code = TextSpan::new("snake_case_name", TextKind::Code);
        let out = split_nodes_delimiter(
            vec![code.clone()],
            "_",
            TextKind::Italic,
            DelimiterPolicy::Strict,
        )
        .unwrap();
        assert_eq!(out, vec![code]);
    }

    #[test]
    fn permissive_unbalanced_marks_trailing_piece() {
        assert_eq!(
            split("an _unclosed italic", "_", TextKind::Italic),
            vec![
                TextSpan::plain("an "),
                TextSpan::new("unclosed italic", TextKind::Italic),
            ]
        );
    }

    #[rstest]
    #[case("an _unclosed italic", "_")]
    #[case("**a** and **b", "**")]
    #[case("`", "`")]
    fn strict_unbalanced_fails(#[case] text: &str, #[case] delimiter: &str) {
        let err = split_nodes_delimiter(
            vec![TextSpan::plain(text)],
            delimiter,
            TextKind::Italic,
            DelimiterPolicy::Strict,
        )
        .unwrap_err();
        assert_eq!(
            err,
            InlineError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: text.to_string(),
            }
        );
    }

    #[test]
    fn strict_balanced_succeeds() {
        let out = split_nodes_delimiter(
            vec![TextSpan::plain("a `b` c")],
            "`",
            TextKind::Code,
            DelimiterPolicy::Strict,
        )
        .unwrap();
        assert_eq!(out.len(), 3);
    }
}
