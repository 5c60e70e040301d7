//! Line Classification
//!
//! Turns one raw line into a [`Token`]. Every pattern must consume the whole line; a
//! prefix match never counts. The block constructs are tried in a fixed order and the
//! first match wins:
//!
//! 1. Header             `# Title [article-id]`
//! 2. Image              `![alt](src)[caption]`
//! 3. Inline link        `[text](path)`
//! 4. Directed container `{ [l-r]`
//! 5. Container open     `{`
//! 6. Container close    `}`
//! 7. Container header   `{ ##Heading }`
//! 8. File upload        `{name}[description](path)`
//! 9. Paragraph          anything else
//!
//! Code fences and list entries are probed before that list, because the article parser
//! has to decide on them before ordinary classification (see [`classify_line`]).
//!
//! The escaped forms (`\- item`, `\{ #Heading }`) never match: every pattern is anchored
//! at the start of the line, so a leading backslash falls through to a paragraph.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Exact text of a code fence line.
pub const CODE_FENCE: &str = "```";

// Captures: hashtags, title, article id (only meaningful for a single hashtag)
static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6}) (.*?)(?: \[(.*)\])?$").unwrap());

// Captures: alt text, src path, caption
static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!\[(.*?)\]\((.*?)\)\[(.*?)\]$").unwrap());

// Captures: link text, path
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(.*?)\]\((.*?)\)$").unwrap());

// Captures: direction code. A lone word character is accepted so that it reaches the
// invalid-direction diagnostic instead of silently becoming a paragraph.
static DIRECTED_CONTAINER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{ \[(\w(?:-\w)?)\]$").unwrap());

// Captures: hashtags, heading (no internal spaces)
static CONTAINER_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{ *(#{1,6})([^ ]+) *\}$").unwrap());

// Captures: display name, description, file path
static FILE_UPLOAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{(.*?)\}\[(.*?)\]\((.*?)\)$").unwrap());

// Captures: entry content
static LIST_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- (.*)$").unwrap());

/// Direction of a directed container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    LeftRight,
    RightLeft,
    /// Syntactically valid but unknown direction code, kept verbatim for the diagnostic
    Invalid(String),
}

impl Direction {
    pub fn from_code(code: &str) -> Self {
        match code {
            "l-r" => Direction::LeftRight,
            "r-l" => Direction::RightLeft,
            other => Direction::Invalid(other.to_string()),
        }
    }

    /// Class name added to the container, if the direction is known
    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            Direction::LeftRight => Some("left-right"),
            Direction::RightLeft => Some("right-left"),
            Direction::Invalid(_) => None,
        }
    }
}

/// The classified meaning of one input line, independent of parser state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Token {
    Paragraph {
        text: String,
    },
    Header {
        level: usize,
        title: String,
        /// Only populated for level-1 headers
        article_id: Option<String>,
    },
    Image {
        alt: String,
        src: String,
        caption: String,
    },
    InlineLink {
        text: String,
        path: String,
    },
    DirectedContainerOpen {
        direction: Direction,
    },
    ContainerOpen,
    ContainerClose,
    ContainerHeader {
        level: usize,
        heading: String,
    },
    FileUpload {
        name: String,
        description: String,
        path: String,
    },
    CodeFence,
    ListEntry {
        content: String,
    },
}

impl Token {
    pub fn token_type(&self) -> &'static str {
        match self {
            Token::Paragraph { .. } => "paragraph",
            Token::Header { .. } => "header",
            Token::Image { .. } => "image",
            Token::InlineLink { .. } => "inline-link",
            Token::DirectedContainerOpen { .. } => "directed-container-open",
            Token::ContainerOpen => "container-open",
            Token::ContainerClose => "container-close",
            Token::ContainerHeader { .. } => "container-header",
            Token::FileUpload { .. } => "file-upload",
            Token::CodeFence => "code-fence",
            Token::ListEntry { .. } => "list-entry",
        }
    }
}

/// Classify a line the way the article parser sees it outside of a code block.
///
/// Returns `None` for an empty line. Code fences and list entries are probed first,
/// then the block constructs in precedence order.
pub fn classify_line(line: &str) -> Option<Token> {
    if line.is_empty() {
        return None;
    }

    if is_code_fence(line) {
        return Some(Token::CodeFence);
    }

    if let Some(content) = list_entry(line) {
        return Some(Token::ListEntry {
            content: content.to_string(),
        });
    }

    Some(classify_block(line))
}

/// Classify a line against the block constructs only (precedence 1 to 9).
///
/// Never fails: anything unrecognized is a paragraph carrying the line verbatim.
pub fn classify_block(line: &str) -> Token {
    if let Some(caps) = HEADER.captures(line) {
        let level = caps[1].len();
        let article_id = if level == 1 {
            caps.get(3).map(|m| m.as_str().to_string())
        } else {
            None
        };
        return Token::Header {
            level,
            title: caps[2].to_string(),
            article_id,
        };
    }

    if let Some(caps) = IMAGE.captures(line) {
        return Token::Image {
            alt: caps[1].to_string(),
            src: caps[2].to_string(),
            caption: caps[3].to_string(),
        };
    }

    if let Some(caps) = LINK.captures(line) {
        return Token::InlineLink {
            text: caps[1].to_string(),
            path: caps[2].to_string(),
        };
    }

    if let Some(caps) = DIRECTED_CONTAINER.captures(line) {
        return Token::DirectedContainerOpen {
            direction: Direction::from_code(&caps[1]),
        };
    }

    if line == "{" {
        return Token::ContainerOpen;
    }

    if line == "}" {
        return Token::ContainerClose;
    }

    if let Some(caps) = CONTAINER_HEADER.captures(line) {
        return Token::ContainerHeader {
            level: caps[1].len(),
            heading: caps[2].to_string(),
        };
    }

    if let Some(caps) = FILE_UPLOAD.captures(line) {
        return Token::FileUpload {
            name: caps[1].to_string(),
            description: caps[2].to_string(),
            path: caps[3].to_string(),
        };
    }

    Token::Paragraph {
        text: line.to_string(),
    }
}

/// True if the line is exactly a code fence
pub fn is_code_fence(line: &str) -> bool {
    line == CODE_FENCE
}

/// Content of a `- content` list entry line
pub fn list_entry(line: &str) -> Option<&str> {
    LIST_ENTRY
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Number of hashtags if the line is a header line.
///
/// Used by the document driver to find article boundaries.
pub fn header_level(line: &str) -> Option<usize> {
    HEADER.captures(line).map(|caps| caps[1].len())
}
