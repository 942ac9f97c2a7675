//! S5 serialization (Markdown → slideshow HTML)
//!
//! [`SlideRenderer`] implements [`BlockRenderer`] and overrides five slots:
//! document header/footer, headings, thematic breaks, and images. Every
//! other block keeps the engine default. The interesting state is a single
//! monotonic slide counter: a close is emitted before an open exactly when
//! a slide is already open, and the footer emits the one trailing close.

use crate::error::RenderError;
use crate::escape::{escape_href, escape_html};
use crate::markdown::metadata::DocumentMetadata;
use crate::renderer::{delegate_to_engine, BlockRenderer};
use crate::s5::dimensions::parse_dimensions;
use crate::s5::templates;
use crate::s5::S5Options;
use comrak::nodes::AstNode;
use comrak::ComrakOptions;

/// Stateful S5 renderer for one document.
///
/// One instance per render; the slide and TOC counters are meaningless
/// across documents.
pub struct SlideRenderer {
    options: S5Options,
    /// Number of slides opened so far; only ever increases.
    slide_nr: usize,
    /// Monotonic counter behind `id="toc_N"` heading anchors.
    header_count: usize,
    /// Reserved for per-slide presenter-notes handling.
    #[allow(dead_code)]
    inside_notes: bool,
}

impl SlideRenderer {
    pub fn new(options: S5Options) -> Self {
        SlideRenderer {
            options,
            slide_nr: 0,
            header_count: 0,
            inside_notes: false,
        }
    }

    /// Close the open slide (if any) and open the next one.
    fn open_slide(&mut self, out: &mut String) {
        if self.slide_nr > 0 {
            out.push_str("</div>\n");
        }
        out.push_str("<div class=\"slide\">\n");
        self.slide_nr += 1;
    }
}

impl BlockRenderer for SlideRenderer {
    fn document_header(&mut self, out: &mut String, meta: Option<&DocumentMetadata>) {
        out.push_str(&templates::document_preamble(meta));
        out.push_str(&templates::title_slide(meta));
    }

    fn document_footer(&mut self, out: &mut String) {
        if self.slide_nr > 0 {
            out.push_str("</div>\n");
        }
        out.push_str(templates::DOCUMENT_CLOSING);
    }

    fn heading<'a>(
        &mut self,
        out: &mut String,
        node: &'a AstNode<'a>,
        level: u8,
        md: &ComrakOptions<'_>,
    ) -> Result<(), RenderError> {
        // Only top-level headings are slide boundaries.
        if level == 1 {
            self.open_slide(out);
        }

        // Cosmetic blank line before the heading markup.
        if !out.is_empty() {
            out.push('\n');
        }

        if self.options.toc {
            out.push_str(&format!("<h{level} id=\"toc_{}\">", self.header_count));
            self.header_count += 1;
        } else {
            out.push_str(&format!("<h{level}>"));
        }

        // Inline content is the engine's problem, escaping included.
        for child in node.children() {
            delegate_to_engine(child, md, out)?;
        }

        out.push_str(&format!("</h{level}>\n"));
        Ok(())
    }

    fn thematic_break<'a>(
        &mut self,
        out: &mut String,
        _node: &'a AstNode<'a>,
        _md: &ComrakOptions<'_>,
    ) -> Result<(), RenderError> {
        if !out.is_empty() {
            out.push('\n');
        }
        // A rule is consumed entirely as a slide boundary; no <hr> appears.
        self.open_slide(out);
        Ok(())
    }

    fn image(&mut self, url: &str, title: &str, alt: &str) -> Option<String> {
        if url.is_empty() {
            return None;
        }

        let mut tag = String::from("<img src=\"");
        match parse_dimensions(url) {
            Some((prefix, width, height)) => {
                tag.push_str(&escape_href(prefix));
                tag.push_str(&format!("\" width=\"{width}\" height=\"{height}\""));
            }
            None => {
                tag.push_str(&escape_href(url));
                tag.push('"');
            }
        }

        if !title.is_empty() {
            tag.push_str(&format!(" title=\"{}\"", escape_html(title)));
        }
        tag.push_str(&format!(" alt=\"{}\"", escape_html(alt)));

        tag.push_str(if self.options.xhtml { "/>" } else { ">" });
        Some(tag)
    }
}
