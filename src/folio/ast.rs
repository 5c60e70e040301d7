//! Node tree for parsed articles
//!
//! This module provides the tagged-variant node types produced by the article parser.
//! Each variant declares whether it may own children (its scope capability) and whether
//! it serializes as a self-closing tag.
//!
//! ## Modules
//!
//! - `node` - [`Node`], [`NodeKind`] and the child/class mutation rules

pub mod node;

pub use node::{ListKind, Node, NodeKind};
