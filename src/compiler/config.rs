//! Configuration layering
//!
//!     `defaults/pugc.default.toml` is embedded into the binary so the shipped defaults and the
//!     documented ones never drift apart. [Loader] layers an optional user file on top of those
//!     defaults before deserializing into [PugcConfig].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::compiler::render::RenderOptions;

const DEFAULT_TOML: &str = include_str!("defaults/pugc.default.toml");

/// Top-level configuration consumed by the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct PugcConfig {
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub use_tabs: bool,
    pub tab_size: usize,
    pub minify: bool,
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions {
            use_tabs: config.use_tabs,
            tab_size: config.tab_size,
            minify: config.minify,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Starts a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layers an optional configuration file; absent files are silently ignored.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref()).format(FileFormat::Toml).required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Finalizes the builder and deserializes the resulting configuration.
    pub fn build(self) -> Result<PugcConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the built-in defaults.
pub fn load_defaults() -> Result<PugcConfig, ConfigError> {
    Loader::new().build()
}
