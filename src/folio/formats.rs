//! Output formats
//!
//! - `html` - the indented tag serialization of articles
//! - `json` - token and tree dumps for inspection

pub mod html;
pub mod json;

pub use html::{serialize_node, RenderOptions};
