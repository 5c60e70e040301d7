//! Diagnostic sink
//!
//! Parsing never fails; the only anomaly it reports is an unknown direction on a directed
//! container. Reports go to a [`DiagnosticSink`], which is fire-and-forget: it returns
//! nothing and the parser carries on regardless of what the sink does with the message.

use std::cell::RefCell;

/// Receives human-readable warnings from the parser
pub trait DiagnosticSink {
    /// Report a warning made of `items` joined by `separator`
    fn warn(&self, items: &[&str], separator: &str);
}

/// Forwards warnings to `tracing` at WARN level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, items: &[&str], separator: &str) {
        tracing::warn!(target: "folio", "{}", items.join(separator));
    }
}

/// Keeps every warning in memory, in the order received
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: RefCell<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn warn(&self, items: &[&str], separator: &str) {
        self.messages.borrow_mut().push(items.join(separator));
    }
}
