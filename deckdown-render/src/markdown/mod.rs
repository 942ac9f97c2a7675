//! Markdown intake (the external engine boundary)
//!
//! # Library Choice
//!
//! We use `comrak` for everything Markdown: parsing, the block tree, inline
//! recognition, reference links, HTML passthrough, and the default HTML
//! rendering of every block we do not override. comrak is the CommonMark +
//! GFM reference-quality engine in Rust; re-implementing any of that here
//! would be a non-starter.
//!
//! This module owns the engine option set and the frontmatter metadata
//! extraction that feeds the document header templates.

pub mod metadata;
pub mod parser;

pub use metadata::DocumentMetadata;
pub use parser::engine_options;
