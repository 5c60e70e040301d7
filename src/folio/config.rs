//! Configuration loader
//!
//! Settings resolve in three layers, later ones winning:
//!
//! 1. `defaults/folio.default.toml`, compiled in
//! 2. a TOML file named with `--config`
//! 3. single keys set from the command line, such as `--indent`
//!
//! [`Loader`] stacks the layers and deserializes the result into [`FolioConfig`], which
//! hands the parser and the HTML writer their options.

use crate::folio::formats::html::RenderOptions;
use crate::folio::parsing::ParseOptions;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/folio.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FolioConfig {
    pub render: RenderConfig,
    pub file_upload: FileUploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub indent_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileUploadConfig {
    pub icon_src: String,
    pub icon_alt: String,
}

impl FolioConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            file_icon_src: self.file_upload.icon_src.clone(),
            file_icon_alt: self.file_upload.icon_alt.clone(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::with_indent_width(self.render.indent_width)
    }
}

/// Builds a [`FolioConfig`] from the compiled-in defaults plus any user layers
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only `folio.default.toml`
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Stack a user TOML file over the defaults. The file must exist when [`build`] runs.
    ///
    /// [`build`]: Loader::build
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. `render.indent_width`, above every file layer
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers. Fails on a missing user file, bad TOML or a mistyped key.
    pub fn build(self) -> Result<FolioConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The compiled-in defaults with no user layers
pub fn load_defaults() -> Result<FolioConfig, ConfigError> {
    Loader::new().build()
}
