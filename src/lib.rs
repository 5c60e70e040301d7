//! # folio
//!
//! Converts the folio line-oriented markup dialect into nested, indented HTML articles.
//!
//! ## Testing
//!
//! Tree-shape tests use the fluent assertions in [testing module](folio::testing)
//! rather than walking nodes by hand.

pub mod folio;

pub use folio::parsing::{parse_document, to_html, ArticleParser, Document};
