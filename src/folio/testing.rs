//! Fluent assertion API for article trees
//!
//! Tests describe the expected shape of a tree instead of walking nodes by hand. When the
//! node representation changes only this module needs updating.
//!
//! ```rust,ignore
//! use folio::folio::testing::assert_tree;
//!
//! assert_tree(&article)
//!     .id("abc")
//!     .child_count(1)
//!     .child(0, |section| {
//!         section
//!             .is_section()
//!             .child(0, |h| h.is_header(1).content("Title"))
//!             .child(1, |p| p.is_paragraph().content("Hello"))
//!     });
//! ```

use crate::folio::ast::{ListKind, Node, NodeKind};

/// Create an assertion builder for a node
pub fn assert_tree(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: node.node_type().to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn node(&self) -> &'a Node {
        self.node
    }

    fn expect_type(self, expected: &str) -> Self {
        assert_eq!(
            self.node.node_type(),
            expected,
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.node.node_type()
        );
        self
    }

    pub fn is_article(self) -> Self {
        self.expect_type("article")
    }

    pub fn is_section(self) -> Self {
        self.expect_type("section")
    }

    pub fn is_div(self) -> Self {
        self.expect_type("div")
    }

    pub fn is_paragraph(self) -> Self {
        self.expect_type("paragraph")
    }

    pub fn is_figure(self) -> Self {
        self.expect_type("figure")
    }

    pub fn is_figcaption(self) -> Self {
        self.expect_type("figcaption")
    }

    pub fn is_link(self) -> Self {
        self.expect_type("link")
    }

    pub fn is_button(self) -> Self {
        self.expect_type("button")
    }

    pub fn is_list_item(self) -> Self {
        self.expect_type("list-item")
    }

    pub fn is_header(self, level: usize) -> Self {
        assert_eq!(
            self.node.kind,
            NodeKind::Header { level },
            "{}: Expected level {} header",
            self.context,
            level
        );
        self
    }

    pub fn is_image(self, alt: &str) -> Self {
        assert_eq!(
            self.node.kind,
            NodeKind::Image {
                alt: alt.to_string()
            },
            "{}: Expected image with alt {:?}",
            self.context,
            alt
        );
        self
    }

    pub fn is_list(self, kind: ListKind) -> Self {
        assert_eq!(
            self.node.kind,
            NodeKind::List { kind },
            "{}: Expected {:?} list",
            self.context,
            kind
        );
        self
    }

    pub fn link_text(self, expected: &str) -> Self {
        match &self.node.kind {
            NodeKind::Link { text } => assert_eq!(
                text, expected,
                "{}: Expected link text {:?}",
                self.context, expected
            ),
            _ => panic!("{}: Expected link, found {}", self.context, self.node.node_type()),
        }
        self
    }

    /// Assert this is a code block holding exactly `expected` raw lines
    pub fn code_lines(self, expected: &[&str]) -> Self {
        match self.node.code_lines() {
            Some(lines) => assert_eq!(
                lines, expected,
                "{}: Code block lines differ",
                self.context
            ),
            None => panic!(
                "{}: Expected code-block, found {}",
                self.context,
                self.node.node_type()
            ),
        }
        self
    }

    pub fn id(self, expected: &str) -> Self {
        assert_eq!(self.node.id, expected, "{}: Expected id {:?}", self.context, expected);
        self
    }

    pub fn class_name(self, expected: &str) -> Self {
        assert_eq!(
            self.node.class_name, expected,
            "{}: Expected class {:?}",
            self.context, expected
        );
        self
    }

    pub fn content(self, expected: &str) -> Self {
        assert_eq!(
            self.node.content, expected,
            "{}: Expected content {:?}",
            self.context, expected
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} children, found {} children",
            self.context, expected, actual
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> NodeAssertion<'a>,
    {
        let child = self.node.child(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds ({} children)",
                self.context,
                index,
                self.node.children().len()
            )
        });
        assertion(NodeAssertion {
            node: child,
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }
}
