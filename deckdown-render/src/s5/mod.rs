//! S5 slideshow output format
//!
//! Converts a Markdown document into a single S5 XHTML slideshow file.
//!
//! # Slide mapping
//!
//! | Markdown block       | S5 output                                            |
//! |----------------------|------------------------------------------------------|
//! | frontmatter          | consumed: title/author/date for the document chrome  |
//! | level-1 heading      | closes the open slide, opens a new one, then `<h1>`  |
//! | thematic break       | closes the open slide, opens a new one (no `<hr>`)   |
//! | heading level 2+     | heading inside the current slide                     |
//! | image `url =WxH`     | `<img>` with explicit width/height attributes        |
//! | everything else      | delegated unchanged to comrak                        |
//!
//! The document chrome (XHTML preamble, title slide, closing tags) comes
//! from fixed templates in [`templates`]; the serializer in [`serializer`]
//! owns the slide-boundary bookkeeping. The generated file expects the
//! standard S5 `ui/` directory (stylesheets + `slides.js`) next to it.

pub mod dimensions;
pub mod serializer;
pub mod templates;

use crate::error::RenderError;
use crate::markdown::metadata::{extract_metadata, DocumentMetadata};
use crate::markdown::parser::engine_options;
use crate::renderer::render_document;
use comrak::nodes::NodeValue;
use comrak::{parse_document, Arena};
use serializer::SlideRenderer;

/// Options for one slideshow render.
///
/// Owned by the render session; concurrent renders each need their own
/// instance (and their own output buffer). `hardbreaks` and `smart` are
/// forwarded to the engine; `xhtml` and `toc` steer this layer's own markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S5Options {
    /// Close void tags XHTML-style (`/>`) rather than `>`
    pub xhtml: bool,
    /// Emit `id="toc_N"` anchors on headings
    pub toc: bool,
    /// Render soft breaks as `<br>` (engine flag)
    pub hardbreaks: bool,
    /// Smart punctuation (engine flag)
    pub smart: bool,
}

impl Default for S5Options {
    fn default() -> Self {
        // The emitted document is XHTML 1.0 Strict, so self-closing tags
        // are the default.
        S5Options {
            xhtml: true,
            toc: false,
            hardbreaks: false,
            smart: false,
        }
    }
}

/// Render a Markdown source string to a complete S5 slideshow document.
pub fn render_slideshow(source: &str, options: &S5Options) -> Result<String, RenderError> {
    let arena = Arena::new();
    let md = engine_options(options);
    let root = parse_document(&arena, source, &md);
    let meta = extract_metadata(root);

    let mut renderer = SlideRenderer::new(options.clone());
    let mut out = String::new();
    render_document(&mut renderer, root, meta.as_ref(), &md, &mut out)?;
    Ok(out)
}

/// Parse only the frontmatter metadata of a document.
pub fn parse_metadata(source: &str) -> Option<DocumentMetadata> {
    let arena = Arena::new();
    let md = engine_options(&S5Options::default());
    let root = parse_document(&arena, source, &md);
    extract_metadata(root)
}

/// Count the slides a render of `source` would open.
///
/// One per top-level level-1 heading or thematic break, in document order.
pub fn slide_count(source: &str) -> usize {
    let arena = Arena::new();
    let md = engine_options(&S5Options::default());
    let root = parse_document(&arena, source, &md);

    root.children()
        .filter(|node| match &node.data.borrow().value {
            NodeValue::ThematicBreak => true,
            NodeValue::Heading(heading) => heading.level == 1,
            _ => false,
        })
        .count()
}
