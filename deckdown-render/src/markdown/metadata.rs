//! Frontmatter metadata extraction (Markdown → DocumentMetadata)
//!
//! The document header templates need a title, author and date. Those come
//! from a YAML-ish frontmatter block when one is present:
//!
//! ```text
//! ---
//! title: My Talk
//! author: Me
//! date: 2026-08-29
//! ---
//! ```
//!
//! Parsing is deliberately shallow: `key: value` lines, quotes trimmed.
//! Anything richer (nested maps, lists) is ignored rather than rejected.

use comrak::nodes::{AstNode, NodeValue};
use serde::Serialize;

/// Document metadata consumed once at document-header render time.
///
/// Missing keys default to empty strings; the templates substitute them
/// as-is (after escaping), so absent metadata simply renders empty fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub date: String,
}

/// Extract metadata from the document's frontmatter block, if any.
///
/// Returns `None` when the document has no frontmatter at all; callers then
/// render the header templates with every field empty.
pub fn extract_metadata<'a>(root: &'a AstNode<'a>) -> Option<DocumentMetadata> {
    for node in root.children() {
        if let NodeValue::FrontMatter(content) = &node.data.borrow().value {
            return Some(parse_frontmatter(content));
        }
    }
    None
}

fn parse_frontmatter(content: &str) -> DocumentMetadata {
    let yaml = content
        .trim()
        .trim_start_matches("---")
        .trim_end_matches("---")
        .trim();

    let mut meta = DocumentMetadata::default();
    for line in yaml.lines() {
        if let Some((key, value)) = line.split_once(':') {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            match key.trim() {
                "title" => meta.title = value.to_string(),
                "author" => meta.author = value.to_string(),
                "date" => meta.date = value.to_string(),
                _ => {}
            }
        }
    }
    meta
}
