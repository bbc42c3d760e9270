/// Fenced code block type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// An opening fence may carry a language tag, which is ignored.
    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::FENCE)
    }

    /// A closing fence is the bare marker.
    pub fn closes(line: &str) -> bool {
        line.trim_end() == Self::FENCE
    }

    /// True when `lines` is an opening fence, any content, and a closing fence.
    pub fn is_fenced(lines: &[&str]) -> bool {
        match lines {
            [first, .., last] => Self::opens(first) && Self::closes(last),
            _ => false,
        }
    }

    /// The lines between the fences, each terminated by `\n`.
    ///
    /// Content is returned verbatim; inline markdown inside is never interpreted.
    pub fn body(block: &str) -> String {
        let lines: Vec<&str> = block.split('\n').collect();
        let Some(inner) = lines.get(1..lines.len().saturating_sub(1)) else {
            return String::new();
        };
        let mut out = String::new();
        for line in inner {
            out.push_str(line);
            out.push('\n');
        }
        if out.is_empty() {
            out.push('\n');
        }
        out
    }
}
