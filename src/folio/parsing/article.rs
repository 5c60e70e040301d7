//! Article state machine
//!
//! An [`ArticleParser`] owns one article tree and a stack of open containers. The stack
//! starts with the article root, which is never popped. Each line is fully resolved before
//! the next one is read:
//!
//! 1. Empty lines are ignored.
//! 2. Inside a code block every line is stored raw until the closing fence.
//! 3. A fence opens a code block under the current container.
//! 4. List entries extend the open list or start a new one; any other line closes an open
//!    list and is then processed normally.
//! 5. Everything else is classified and applied to the current container.
//!
//! Open containers are held outside the tree and attached to their parent when they close.
//! Nothing else can be appended to a parent while one of its children is open, so sibling
//! order is the order in which nodes were created. The current container is the top of the
//! stack, which keeps each line's work independent of nesting depth.

use crate::folio::ast::{ListKind, Node, NodeKind};
use crate::folio::diagnostics::DiagnosticSink;
use crate::folio::grammar::{self, Direction, Token};
use crate::folio::parsing::ParseOptions;
use tracing::trace;

const SECTION_CLASS: &str = "root-section";
const DIRECTED_CLASS: &str = "content-container";
const FILE_UPLOAD_CLASS: &str = "fileupload";
const FILE_UPLOAD_TEXT_CLASS: &str = "fileupload-text";
const FILE_UPLOAD_HEADER_CLASS: &str = "fileupload-header";
const FILE_UPLOAD_DESC_CLASS: &str = "fileupload-desc";

/// Stack depth (beyond the root) that headers collapse to before opening their section.
///
/// Note that this keeps one container above the root, so every header after the first
/// lands inside the first open section, and a header inside a nested div escapes it.
const HEADER_COLLAPSE_DEPTH: usize = 1;

/// Parser for a single article
pub struct ArticleParser<'a> {
    root: Node,
    /// Open containers below the root, outermost first
    open: Vec<Node>,
    options: &'a ParseOptions,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> ArticleParser<'a> {
    pub fn new(options: &'a ParseOptions, sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            root: Node::article(),
            open: Vec::new(),
            options,
            sink,
        }
    }

    /// Number of open containers, root included. Never less than 1.
    pub fn depth(&self) -> usize {
        self.open.len() + 1
    }

    /// The container new nodes are appended to
    pub fn current(&self) -> &Node {
        self.open.last().unwrap_or(&self.root)
    }

    /// True while lines are being captured raw
    pub fn in_code_block(&self) -> bool {
        matches!(self.current().kind, NodeKind::CodeBlock { .. })
    }

    pub fn in_list(&self) -> bool {
        matches!(self.current().kind, NodeKind::List { .. })
    }

    /// Consume one line (without its line separator)
    pub fn feed_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }

        if self.in_code_block() {
            if grammar::is_code_fence(line) {
                self.close_container();
            } else {
                self.current_mut().push_code_line(line);
            }
            return;
        }

        let Some(token) = grammar::classify_line(line) else {
            return;
        };

        if self.in_list() && !matches!(token, Token::ListEntry { .. } | Token::CodeFence) {
            // The line that ends a list is processed like any other
            self.close_container();
        }

        self.apply(token);
    }

    /// Close whatever is still open and hand over the finished article tree
    pub fn finish(mut self) -> Node {
        self.collapse_to(0);
        self.root
    }

    fn apply(&mut self, token: Token) {
        match token {
            Token::Paragraph { text } => {
                self.append(Node::paragraph(text));
            }
            Token::Header {
                level,
                title,
                article_id,
            } => {
                if level == 1 {
                    self.root.id = article_id.unwrap_or_default();
                }
                let mut section = Node::section().with_class(SECTION_CLASS);
                section.add_child(Node::header(level, title));

                self.collapse_to(HEADER_COLLAPSE_DEPTH);
                self.open_container(section);
            }
            Token::Image { alt, src, caption } => {
                let mut figure = Node::figure();
                figure.add_children([Node::image(src, alt), Node::figcaption(caption)]);
                self.append(figure);
            }
            Token::InlineLink { text, path } => {
                self.append(Node::link(text, path));
            }
            Token::DirectedContainerOpen { direction } => {
                let mut div = Node::div().with_class(DIRECTED_CLASS);
                if let Some(class_name) = direction.class_name() {
                    div.add_class(&[class_name]);
                }
                if let Direction::Invalid(code) = &direction {
                    self.sink
                        .warn(&["Defined direction is invalid; input:", code.as_str()], " ");
                }
                // Opened like a plain container so that a closing brace ends it
                self.open_container(div);
            }
            Token::ContainerOpen => {
                self.open_container(Node::div());
            }
            Token::ContainerClose => {
                self.close_container();
            }
            Token::ContainerHeader { level, heading } => {
                self.append(Node::header(level, heading));
            }
            Token::FileUpload {
                name,
                description,
                path,
            } => {
                let upload = self.file_upload(name, description, path);
                self.append(upload);
            }
            Token::CodeFence => {
                self.open_container(Node::code_block());
            }
            Token::ListEntry { content } => {
                if self.in_list() {
                    self.append(Node::list_item(content));
                } else {
                    let mut list = Node::list(ListKind::Unordered);
                    list.add_child(Node::list_item(content));
                    self.open_container(list);
                }
            }
        }
    }

    fn file_upload(&self, name: String, description: String, path: String) -> Node {
        let mut text = Node::div().with_class(FILE_UPLOAD_TEXT_CLASS);
        text.add_children([
            Node::paragraph(name).with_class(FILE_UPLOAD_HEADER_CLASS),
            Node::paragraph(description).with_class(FILE_UPLOAD_DESC_CLASS),
        ]);

        let icon = Node::image(
            self.options.file_icon_src.as_str(),
            self.options.file_icon_alt.as_str(),
        );

        let mut upload = Node::div()
            .with_class(FILE_UPLOAD_CLASS)
            .with_content(path);
        upload.add_children([icon, text, Node::button()]);
        upload
    }

    fn current_mut(&mut self) -> &mut Node {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    fn append(&mut self, node: Node) -> bool {
        self.current_mut().add_child(node)
    }

    /// Append a container and make it current
    fn open_container(&mut self, node: Node) {
        if !node.creates_scope() {
            self.append(node);
            return;
        }

        if self.current().creates_scope() {
            trace!(depth = self.depth() + 1, "opened {}", node.node_type());
            self.open.push(node);
        }
    }

    /// Pop the current container and attach it to its parent. The root stays.
    fn close_container(&mut self) {
        match self.open.pop() {
            Some(node) => {
                self.current_mut().add_child(node);
                trace!(depth = self.depth(), "closed container");
            }
            None => trace!("close ignored at article root"),
        }
    }

    /// Close containers until `depth` remain above the root
    fn collapse_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            self.close_container();
        }
    }
}
