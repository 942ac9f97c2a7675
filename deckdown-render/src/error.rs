//! Error types for rendering operations

use std::fmt;

/// Errors that can occur while rendering a slideshow.
///
/// Note what is *not* here: a failed dimension extraction and an image with
/// no link are normal control flow, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The Markdown engine failed while formatting a delegated block
    Engine(String),
    /// Rendered output could not be assembled (e.g. invalid UTF-8)
    Serialization(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Engine(msg) => write!(f, "Engine error: {msg}"),
            RenderError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
