//! File processing API
//!
//! Reads a source file and produces one of the output formats:
//!
//! - `html` - the rendered articles
//! - `tokens-json` - the classification of every line, without parsing
//! - `ast-json` - the parsed article trees

use crate::folio::config::FolioConfig;
use crate::folio::diagnostics::DiagnosticSink;
use crate::folio::formats::json;
use crate::folio::parsing::parse_document;
use std::fmt;
use std::fs;
use std::path::Path;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    TokensJson,
    AstJson,
}

impl OutputFormat {
    /// Parse a format name like "html" or "tokens-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        match format_str {
            "html" => Ok(OutputFormat::Html),
            "tokens-json" => Ok(OutputFormat::TokensJson),
            "ast-json" => Ok(OutputFormat::AstJson),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::TokensJson => "tokens-json",
            OutputFormat::AstJson => "ast-json",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Html => "Rendered articles as indented HTML",
            OutputFormat::TokensJson => "Per-line classification as JSON",
            OutputFormat::AstJson => "Parsed article trees as JSON",
        }
    }

    /// Get all available output formats
    pub fn available() -> &'static [OutputFormat] {
        &[
            OutputFormat::Html,
            OutputFormat::TokensJson,
            OutputFormat::AstJson,
        ]
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    IoError(String),
    InvalidFormat(String),
    Config(String),
    Serialization(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::InvalidFormat(format) => write!(
                f,
                "Invalid format '{}' (expected one of: html, tokens-json, ast-json)",
                format
            ),
            ProcessingError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<serde_json::Error> for ProcessingError {
    fn from(err: serde_json::Error) -> Self {
        ProcessingError::Serialization(err.to_string())
    }
}

impl From<::config::ConfigError> for ProcessingError {
    fn from(err: ::config::ConfigError) -> Self {
        ProcessingError::Config(err.to_string())
    }
}

/// Read the whole source text of a document
pub fn read_source(path: &Path) -> Result<String, ProcessingError> {
    if !path.exists() {
        return Err(ProcessingError::FileNotFound(path.display().to_string()));
    }
    fs::read_to_string(path).map_err(|e| ProcessingError::IoError(e.to_string()))
}

/// Produce `format` output for source text
pub fn process_source(
    source: &str,
    format: OutputFormat,
    config: &FolioConfig,
    sink: &dyn DiagnosticSink,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::TokensJson => Ok(json::tokens_to_json(source)?),
        OutputFormat::Html => {
            let doc = parse_document(source, &config.parse_options(), sink);
            Ok(doc.render(&config.render_options()))
        }
        OutputFormat::AstJson => {
            let doc = parse_document(source, &config.parse_options(), sink);
            json::articles_to_json(doc.articles())
                .map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
    }
}

/// Read a file and produce `format` output
pub fn process_file(
    path: &Path,
    format: OutputFormat,
    config: &FolioConfig,
    sink: &dyn DiagnosticSink,
) -> Result<String, ProcessingError> {
    let source = read_source(path)?;
    process_source(&source, format, config, sink)
}
