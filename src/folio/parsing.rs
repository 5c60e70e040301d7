//! Parsing
//!
//! Turns source text into article trees in a single forward pass:
//!
//! - `document` - splits the source into articles at level-1 headers
//! - `article` - the per-article state machine and its open-container stack

pub mod article;
pub mod document;

pub use article::ArticleParser;
pub use document::{parse_document, to_html, Document};

/// Settings that affect the nodes the parser builds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Source of the file-type image shown in file upload blocks
    pub file_icon_src: String,
    /// Alternate text of that image
    pub file_icon_alt: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            file_icon_src: "img/includes/text-file.webp".to_string(),
            file_icon_alt: "icon of .txt files".to_string(),
        }
    }
}
