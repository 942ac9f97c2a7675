//! Markdown engine tests
//!
//! Frontmatter metadata extraction and engine-flag behavior through the
//! public crate API.
