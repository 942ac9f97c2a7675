//! Engine configuration for Markdown parsing and delegated rendering.
//!
//! Pipeline: Markdown string → comrak AST → S5 serializer (see `crate::s5`).
//! Parsing itself is `comrak::parse_document`; callers own the `Arena`.

use crate::s5::S5Options;
use comrak::ComrakOptions;

/// Build the comrak option set for a render.
///
/// Extensions follow the house defaults (tables, strikethrough, autolink,
/// tasklists, superscript, `---` frontmatter). Raw HTML passes through
/// unescaped: authored HTML is trusted in this pipeline, and the image
/// override injects `HtmlInline` nodes that must reach the output verbatim.
pub fn engine_options(opts: &S5Options) -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.extension.front_matter_delimiter = Some("---".to_string());
    options.render.unsafe_ = true;
    options.render.hardbreaks = opts.hardbreaks;
    options.parse.smart = opts.smart;
    options
}
