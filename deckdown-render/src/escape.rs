//! Escaping primitives for generated markup
//!
//! Two escapers, used at the few points where this layer writes attribute
//! values itself. Inline text inside delegated blocks is escaped by comrak
//! and never passes through here.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters percent-encoded inside href-style attribute values.
const HREF_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'\\')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'^');

/// Escape HTML special characters in text and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape a URL for use in an `src`/`href` attribute.
///
/// Unsafe bytes are percent-encoded; `&` stays a URL separator but must be
/// entity-escaped to survive inside an attribute.
pub fn escape_href(url: &str) -> String {
    utf8_percent_encode(url, HREF_UNSAFE)
        .to_string()
        .replace('&', "&amp;")
}
