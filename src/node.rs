//! HTML node tree and serialization.
//!
//! Output is not escaped: text and attribute values are written verbatim.
//! Markdown sources are trusted, and exact output is part of the contract.

/// Attributes in insertion order.
pub type Attributes = Vec<(String, String)>;

/// A node in an HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Element with literal text content. A `None` tag renders the value bare.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    /// Element wrapping child nodes.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Tagged leaf without attributes.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Untagged leaf, rendered as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Append an attribute. Existing keys are not deduplicated.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Leaf { attributes, .. } | Self::Parent { attributes, .. } => {
                attributes.push((key.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf { tag, .. } => tag.as_deref(),
            Self::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            Self::Leaf { attributes, .. } | Self::Parent { attributes, .. } => attributes,
        }
    }

    /// Children of a parent node; empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Parent { children, .. } => children,
        }
    }

    /// Attributes as ` key="value"` pairs, or an empty string.
    pub fn attributes_to_html(&self) -> String {
        let mut out = String::new();
        write_attributes(self.attributes(), &mut out);
        out
    }

    /// Serialize the tree to an HTML string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Serialize the tree, appending to `out`.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Self::Leaf {
                tag: None, value, ..
            } => out.push_str(value),
            Self::Leaf {
                tag: Some(tag),
                value,
                attributes,
            } => {
                open_tag(tag, attributes, out);
                out.push_str(value);
                close_tag(tag, out);
            }
            Self::Parent {
                tag,
                children,
                attributes,
            } => {
                open_tag(tag, attributes, out);
                for child in children {
                    child.render_into(out);
                }
                close_tag(tag, out);
            }
        }
    }
}

fn open_tag(tag: &str, attributes: &[(String, String)], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    write_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attributes(attributes: &[(String, String)], out: &mut String) {
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
