//! Indented HTML serialization
//!
//! Serializes a node tree to nested tags, one node per line, indented by a fixed-width
//! unit per depth level. Every tag carries `id` and `class` attributes, in that order.
//!
//! ## Format
//!
//! ```text
//! <article id="intro" class="">
//!     <section id="" class="root-section" href="">
//!         <h1 id="" class="">
//!             Introduction
//!         </h1>
//!         <p id="" class="">Welcome to the guide</p>
//!     </section>
//! </article>
//! ```
//!
//! Code block lines are written without indentation so the text inside `<pre>` is
//! exactly what was captured. Nothing is escaped; content is emitted as authored.

use crate::folio::ast::{Node, NodeKind};
use crate::folio::inlines;
use std::borrow::Cow;

/// Serialization settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level
    pub indent_width: usize,
}

impl RenderOptions {
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self { indent_width }
    }

    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// Serialize a node and its subtree, starting at depth 0
pub fn serialize_node(node: &Node, options: &RenderOptions) -> String {
    let mut out = String::new();
    write_node(&mut out, node, options);
    out
}

/// Pending output. Closing text is queued below a node's children so that nesting depth
/// only grows the work list.
enum Work<'a> {
    Node(&'a Node, usize),
    Text(String),
}

/// Append the serialization of `node` to `out`
pub fn write_node(out: &mut String, node: &Node, options: &RenderOptions) {
    let unit = options.indent_unit();
    let mut work = vec![Work::Node(node, 0)];

    while let Some(item) = work.pop() {
        let (node, depth) = match item {
            Work::Text(text) => {
                out.push_str(&text);
                continue;
            }
            Work::Node(node, depth) => (node, depth),
        };

        let indent = unit.repeat(depth);
        out.push_str(&indent);
        open_tag(out, node);
        if node.is_self_closing() {
            continue;
        }

        let tag = tag_name(&node.kind);
        let content = &node.content;
        let has_children = !node.children().is_empty();
        let close = match &node.kind {
            NodeKind::Paragraph => {
                out.push_str(&inlines::apply(content));
                out.push_str("</p>");
                continue;
            }
            NodeKind::Figcaption | NodeKind::ListItem => {
                out.push_str(content);
                out.push_str(&format!("</{}>", tag));
                continue;
            }
            NodeKind::Button if !has_children => {
                out.push_str(content);
                out.push_str("</button>");
                continue;
            }
            NodeKind::Header { .. } => {
                out.push_str(&format!("\n{indent}{unit}{content}\n{indent}</{tag}>"));
                continue;
            }
            NodeKind::Link { text } => {
                out.push_str(&format!("\n{indent}{unit}{text}"));
                format!("\n{indent}</a>")
            }
            NodeKind::CodeBlock { lines } => {
                out.push_str("<code>");
                out.push_str(&lines.join("\n"));
                if has_children {
                    out.push('\n');
                }
                "</code></pre>".to_string()
            }
            _ => {
                out.push('\n');
                format!("\n{indent}</{tag}>")
            }
        };

        // Children joined by line breaks, then the closing text
        work.push(Work::Text(close));
        for (idx, child) in node.children().iter().enumerate().rev() {
            work.push(Work::Node(child, depth + 1));
            if idx > 0 {
                work.push(Work::Text("\n".to_string()));
            }
        }
    }
}

fn tag_name(kind: &NodeKind) -> Cow<'static, str> {
    let name = match kind {
        NodeKind::Article => "article",
        NodeKind::Section => "section",
        NodeKind::Div => "div",
        NodeKind::Paragraph => "p",
        NodeKind::Header { level } => return Cow::Owned(format!("h{}", level)),
        NodeKind::Image { .. } => "img",
        NodeKind::Link { .. } => "a",
        NodeKind::Figure => "figure",
        NodeKind::Figcaption => "figcaption",
        NodeKind::CodeBlock { .. } => "pre",
        NodeKind::List { kind } => kind.tag_name(),
        NodeKind::ListItem => "li",
        NodeKind::Button => "button",
    };
    Cow::Borrowed(name)
}

/// `<tag id="…" class="…"` plus the variant's own attributes, then `>`
fn open_tag(out: &mut String, node: &Node) {
    out.push_str(&format!(
        "<{} id=\"{}\" class=\"{}\"",
        tag_name(&node.kind),
        node.id,
        node.class_name
    ));
    match &node.kind {
        NodeKind::Section | NodeKind::Div | NodeKind::Link { .. } => {
            out.push_str(&format!(" href=\"{}\"", node.content));
        }
        // src and alt both carry the content
        NodeKind::Image { .. } => {
            out.push_str(&format!(" src=\"{0}\" alt=\"{0}\"", node.content));
        }
        _ => {}
    }
    out.push('>');
}
