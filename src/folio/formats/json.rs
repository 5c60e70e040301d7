//! JSON dumps for inspecting the classifier and the parsed tree
//!
//! Article trees are written through serde_json's pretty formatter from an explicit work
//! list, so arbitrarily deep nesting cannot exhaust the stack. Each node becomes
//! `{"id", "class_name", "content", "kind": {"type", ...}, "children": [...]}`.

use crate::folio::ast::Node;
use crate::folio::grammar::{self, Token};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Value;
use std::io;

/// One classified source line
#[derive(Debug, Serialize)]
pub struct LineToken {
    /// 1-based line number
    pub line: usize,
    /// `None` for empty lines
    pub token: Option<Token>,
}

/// Classify every line of `source` without running the parser.
///
/// Lines inside code fences are classified too; only the parser knows to keep them raw.
pub fn classify_source(source: &str) -> Vec<LineToken> {
    source
        .lines()
        .enumerate()
        .map(|(idx, line)| LineToken {
            line: idx + 1,
            token: grammar::classify_line(line),
        })
        .collect()
}

pub fn tokens_to_json(source: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&classify_source(source))
}

pub fn articles_to_json(articles: &[Node]) -> io::Result<String> {
    let mut out = Vec::new();
    write_nodes(&mut out, articles)?;
    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

enum Step<'a> {
    Node { node: &'a Node, first: bool },
    /// Ends the children array and the object of the node that opened it
    Close,
}

/// Write `nodes` as a pretty-printed JSON array of trees
pub fn write_nodes<W: io::Write>(out: &mut W, nodes: &[Node]) -> io::Result<()> {
    let mut f = PrettyFormatter::new();
    let mut steps = Vec::new();
    push_children(&mut steps, nodes);

    f.begin_array(out)?;
    while let Some(step) = steps.pop() {
        match step {
            Step::Node { node, first } => {
                f.begin_array_value(out, first)?;
                f.begin_object(out)?;
                write_key(out, &mut f, "id", true)?;
                write_scalar(out, &mut f, &node.id)?;
                write_key(out, &mut f, "class_name", false)?;
                write_scalar(out, &mut f, &node.class_name)?;
                write_key(out, &mut f, "content", false)?;
                write_scalar(out, &mut f, &node.content)?;
                write_key(out, &mut f, "kind", false)?;
                write_value(out, &mut f, &serde_json::to_value(&node.kind)?)?;
                f.end_object_value(out)?;
                write_key(out, &mut f, "children", false)?;
                f.begin_array(out)?;

                steps.push(Step::Close);
                push_children(&mut steps, node.children());
            }
            Step::Close => {
                f.end_array(out)?;
                f.end_object_value(out)?;
                f.end_object(out)?;
                f.end_array_value(out)?;
            }
        }
    }
    f.end_array(out)
}

fn push_children<'a>(steps: &mut Vec<Step<'a>>, nodes: &'a [Node]) {
    steps.extend(
        nodes
            .iter()
            .enumerate()
            .rev()
            .map(|(idx, node)| Step::Node { node, first: idx == 0 }),
    );
}

fn write_key<W: io::Write>(
    out: &mut W,
    f: &mut PrettyFormatter<'_>,
    key: &str,
    first: bool,
) -> io::Result<()> {
    f.begin_object_key(out, first)?;
    serde_json::to_writer(&mut *out, key)?;
    f.end_object_key(out)?;
    f.begin_object_value(out)
}

fn write_scalar<W: io::Write>(
    out: &mut W,
    f: &mut PrettyFormatter<'_>,
    value: &str,
) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    f.end_object_value(out)
}

/// Write a small value such as a serialized node kind
fn write_value<W: io::Write>(
    out: &mut W,
    f: &mut PrettyFormatter<'_>,
    value: &Value,
) -> io::Result<()> {
    match value {
        Value::Object(map) => {
            f.begin_object(out)?;
            for (idx, (key, item)) in map.iter().enumerate() {
                write_key(out, f, key, idx == 0)?;
                write_value(out, f, item)?;
                f.end_object_value(out)?;
            }
            f.end_object(out)
        }
        Value::Array(items) => {
            f.begin_array(out)?;
            for (idx, item) in items.iter().enumerate() {
                f.begin_array_value(out, idx == 0)?;
                write_value(out, f, item)?;
                f.end_array_value(out)?;
            }
            f.end_array(out)
        }
        scalar => Ok(serde_json::to_writer(&mut *out, scalar)?),
    }
}
