//! Document driver
//!
//! Splits source text into articles. Each level-1 header starts a new article and becomes
//! that article's first line; anything before the first level-1 header is dropped. A
//! level-1 header inside an open code block is captured as code instead.

use crate::folio::ast::Node;
use crate::folio::diagnostics::{DiagnosticSink, TracingSink};
use crate::folio::formats::html::{serialize_node, RenderOptions};
use crate::folio::grammar;
use crate::folio::parsing::{ArticleParser, ParseOptions};
use tracing::debug;

/// The parsed articles of one source text, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    articles: Vec<Node>,
}

impl Document {
    pub fn articles(&self) -> &[Node] {
        &self.articles
    }

    pub fn into_articles(self) -> Vec<Node> {
        self.articles
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Serialize every article, joined by single line breaks
    pub fn render(&self, options: &RenderOptions) -> String {
        self.articles
            .iter()
            .map(|article| serialize_node(article, options))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Parse a whole source text. Never fails.
pub fn parse_document(
    source: &str,
    options: &ParseOptions,
    sink: &dyn DiagnosticSink,
) -> Document {
    let mut articles = Vec::new();
    let mut current: Option<ArticleParser<'_>> = None;

    for line in source.lines() {
        let in_code = current.as_ref().is_some_and(|p| p.in_code_block());
        if !in_code && grammar::header_level(line) == Some(1) {
            if let Some(parser) = current.take() {
                articles.push(parser.finish());
            }
            debug!(article = articles.len() + 1, "starting article at {:?}", line);
            current = Some(ArticleParser::new(options, sink));
        }

        if let Some(parser) = current.as_mut() {
            parser.feed_line(line);
        }
    }

    if let Some(parser) = current {
        articles.push(parser.finish());
    }

    Document { articles }
}

/// Convert source text to HTML with default settings, reporting warnings through `tracing`
pub fn to_html(source: &str) -> String {
    parse_document(source, &ParseOptions::default(), &TracingSink).render(&RenderOptions::default())
}
