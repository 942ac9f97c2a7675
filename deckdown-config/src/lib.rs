//! Shared configuration loader for the deckdown toolchain.
//!
//! `defaults/deckdown.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`DeckConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use deckdown_render::S5Options;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/deckdown.default.toml");

/// Top-level configuration consumed by deckdown applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckConfig {
    pub render: RenderConfig,
}

/// Mirrors the knobs exposed by the S5 renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub xhtml: bool,
    pub toc: bool,
    pub hardbreaks: bool,
    pub smart: bool,
}

impl From<RenderConfig> for S5Options {
    fn from(config: RenderConfig) -> Self {
        S5Options {
            xhtml: config.xhtml,
            toc: config.toc,
            hardbreaks: config.hardbreaks,
            smart: config.smart,
        }
    }
}

impl From<&RenderConfig> for S5Options {
    fn from(config: &RenderConfig) -> Self {
        S5Options {
            xhtml: config.xhtml,
            toc: config.toc,
            hardbreaks: config.hardbreaks,
            smart: config.smart,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DeckConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DeckConfig, ConfigError> {
    Loader::new().build()
}
