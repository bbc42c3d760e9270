use super::{Attributes, RenderError};

/// Elements rendered without a closing tag or content.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img"];

/// A node in the HTML output tree.
///
/// Each parent owns its children directly; the tree is built once and rendered once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Renders this node and its subtree.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Parent(parent) => parent.write_html(out),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// An atomic element rendered directly from its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attrs: Attributes,
}

impl LeafNode {
    /// Untagged leaf, rendered as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn tagged(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    /// Void elements such as `img` carry their content in attributes, so they
    /// render without a value and never fail with `MissingValue`.
    pub fn is_void(&self) -> bool {
        self.tag
            .as_deref()
            .is_some_and(|tag| VOID_ELEMENTS.contains(&tag))
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        if let Some(tag) = self.tag.as_deref()
            && self.is_void()
        {
            out.push('<');
            out.push_str(tag);
            self.attrs.write_html(out);
            out.push('>');
            return Ok(());
        }

        let value = match self.value.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => {
                return Err(RenderError::MissingValue {
                    tag: self.tag.clone(),
                });
            }
        };

        match self.tag.as_deref() {
            None => out.push_str(value),
            Some(tag) => {
                out.push('<');
                out.push_str(tag);
                self.attrs.write_html(out);
                out.push('>');
                out.push_str(value);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
        Ok(())
    }
}

/// An element whose content is the concatenation of its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Vec<HtmlNode>,
    pub attrs: Attributes,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children,
            attrs: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        let tag = self.tag.as_deref().ok_or(RenderError::MissingTag)?;
        if self.children.is_empty() {
            return Err(RenderError::EmptyChildren {
                tag: tag.to_string(),
            });
        }

        out.push('<');
        out.push_str(tag);
        self.attrs.write_html(out);
        out.push('>');
        for child in &self.children {
            child.write_html(out)?;
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(())
    }
}
