//! Inline formatting hook
//!
//! Paragraph text passes through [`apply`] right before it is serialized. The pass is
//! deliberately inert: it returns the text unchanged. Two inline rules are recognized but
//! not applied:
//!
//! - code spans, text wrapped in single backticks (see [`code_spans`])
//! - bare ampersands that do not start an entity reference (see [`bare_ampersands`])
//!
//! Activating them means rewriting the ranges these helpers report; until then the output
//! keeps the authored text byte for byte.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::ops::Range;

static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+?)`").unwrap());

// Named, decimal or hexadecimal character reference starting at the ampersand
static ENTITY_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);").unwrap());

/// Inline pass over paragraph text. Currently a no-op.
pub fn apply(text: &str) -> Cow<'_, str> {
    Cow::Borrowed(text)
}

/// Byte ranges of backtick-delimited code spans, backticks included
pub fn code_spans(text: &str) -> Vec<Range<usize>> {
    CODE_SPAN.find_iter(text).map(|m| m.range()).collect()
}

/// Byte offsets of ampersands that are not part of an entity reference
pub fn bare_ampersands(text: &str) -> Vec<usize> {
    text.match_indices('&')
        .map(|(idx, _)| idx)
        .filter(|&idx| !ENTITY_REF.is_match(&text[idx..]))
        .collect()
}
