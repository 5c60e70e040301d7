//! Node definitions
//!
//! A [`Node`] carries the attributes every variant shares (identifier, class names, text
//! content, children) and a [`NodeKind`] holding the variant-specific fields. Children are
//! owned exclusively by their parent, appended in order and never moved afterwards.
//!
//! Only variants whose [`Node::creates_scope`] is true accept children. Adding a child to
//! any other node leaves it untouched and reports `false`.
//!
//! Nesting depth is unbounded, so dropping a tree releases descendants iteratively.

use serde::Serialize;

/// Ordered or unordered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn tag_name(&self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// Variant-specific part of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NodeKind {
    Article,
    Section,
    Div,
    Paragraph,
    Header {
        level: usize,
    },
    Image {
        alt: String,
    },
    Link {
        text: String,
    },
    Figure,
    Figcaption,
    /// Raw lines captured between code fences. They are never reclassified.
    CodeBlock {
        lines: Vec<String>,
    },
    List {
        kind: ListKind,
    },
    ListItem,
    Button,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    /// Class names joined by single spaces
    pub class_name: String,
    pub content: String,
    pub kind: NodeKind,
    children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: String::new(),
            class_name: String::new(),
            content: String::new(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn article() -> Self {
        Self::new(NodeKind::Article)
    }

    pub fn section() -> Self {
        Self::new(NodeKind::Section)
    }

    pub fn div() -> Self {
        Self::new(NodeKind::Div)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Paragraph).with_content(text)
    }

    pub fn header(level: usize, text: impl Into<String>) -> Self {
        Self::new(NodeKind::Header { level }).with_content(text)
    }

    /// Image whose content is the source path
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::new(NodeKind::Image { alt: alt.into() }).with_content(src)
    }

    /// Link whose content is the destination path
    pub fn link(text: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(NodeKind::Link { text: text.into() }).with_content(path)
    }

    pub fn figure() -> Self {
        Self::new(NodeKind::Figure)
    }

    pub fn figcaption(caption: impl Into<String>) -> Self {
        Self::new(NodeKind::Figcaption).with_content(caption)
    }

    pub fn code_block() -> Self {
        Self::new(NodeKind::CodeBlock { lines: Vec::new() })
    }

    pub fn list(kind: ListKind) -> Self {
        Self::new(NodeKind::List { kind })
    }

    pub fn list_item(content: impl Into<String>) -> Self {
        Self::new(NodeKind::ListItem).with_content(content)
    }

    pub fn button() -> Self {
        Self::new(NodeKind::Button)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_class(mut self, class_name: &str) -> Self {
        self.add_class(&[class_name]);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn node_type(&self) -> &'static str {
        match self.kind {
            NodeKind::Article => "article",
            NodeKind::Section => "section",
            NodeKind::Div => "div",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Header { .. } => "header",
            NodeKind::Image { .. } => "image",
            NodeKind::Link { .. } => "link",
            NodeKind::Figure => "figure",
            NodeKind::Figcaption => "figcaption",
            NodeKind::CodeBlock { .. } => "code-block",
            NodeKind::List { .. } => "list",
            NodeKind::ListItem => "list-item",
            NodeKind::Button => "button",
        }
    }

    /// Whether this variant may ever receive children.
    ///
    /// Links declare the capability although the article parser never opens them.
    pub fn creates_scope(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Article
                | NodeKind::Section
                | NodeKind::Div
                | NodeKind::Link { .. }
                | NodeKind::Figure
                | NodeKind::CodeBlock { .. }
                | NodeKind::List { .. }
                | NodeKind::Button
        )
    }

    /// Whether the serialized tag has no closing tag
    pub fn is_self_closing(&self) -> bool {
        matches!(self.kind, NodeKind::Image { .. })
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Append a child. Returns `false` and leaves the node unchanged if this variant
    /// cannot own children.
    pub fn add_child(&mut self, child: Node) -> bool {
        if !self.creates_scope() {
            return false;
        }
        self.children.push(child);
        true
    }

    /// Append several children in order, all or nothing
    pub fn add_children(&mut self, children: impl IntoIterator<Item = Node>) -> bool {
        if !self.creates_scope() {
            return false;
        }
        self.children.extend(children);
        true
    }

    /// Append class names, separated from any existing ones by a single space
    pub fn add_class(&mut self, class_names: &[&str]) {
        let joined = class_names.join(" ");
        if self.class_name.is_empty() {
            self.class_name = joined;
        } else {
            self.class_name.push(' ');
            self.class_name.push_str(&joined);
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_name.split_whitespace()
    }

    /// Captured raw lines if this is a code block
    pub fn code_lines(&self) -> Option<&[String]> {
        match &self.kind {
            NodeKind::CodeBlock { lines } => Some(lines),
            _ => None,
        }
    }

    /// Store one raw line in a code block. Returns `false` for any other variant.
    pub fn push_code_line(&mut self, line: impl Into<String>) -> bool {
        match &mut self.kind {
            NodeKind::CodeBlock { lines } => {
                lines.push(line.into());
                true
            }
            _ => false,
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
