//! Block renderer abstraction and the single-pass document driver
//!
//! Renderer dispatch is a trait rather than a callback table: the default
//! method bodies are the generic fallbacks (they hand the block straight to
//! comrak's HTML formatter), and a renderer overrides exactly the slots it
//! cares about. Renderer state lives in the implementing type; there is no
//! untyped context anywhere.
//!
//! The driver walks the engine-owned block tree once, top to bottom, on the
//! calling thread. Callbacks never suspend or re-enter. Concurrent renders
//! are fine as long as each owns its renderer and output buffer.

use crate::error::RenderError;
use crate::markdown::metadata::DocumentMetadata;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{format_html, ComrakOptions};

/// Callback surface invoked by [`render_document`] for each top-level block.
///
/// Implementors override a slot to replace comrak's rendering of that block;
/// every other slot keeps the engine default.
pub trait BlockRenderer {
    /// Called exactly once before any block.
    fn document_header(&mut self, _out: &mut String, _meta: Option<&DocumentMetadata>) {}

    /// Called exactly once after the last block.
    fn document_footer(&mut self, _out: &mut String) {}

    /// Render a heading block of the given level.
    fn heading<'a>(
        &mut self,
        out: &mut String,
        node: &'a AstNode<'a>,
        _level: u8,
        md: &ComrakOptions<'_>,
    ) -> Result<(), RenderError> {
        self.block(out, node, md)
    }

    /// Render a thematic break.
    fn thematic_break<'a>(
        &mut self,
        out: &mut String,
        node: &'a AstNode<'a>,
        md: &ComrakOptions<'_>,
    ) -> Result<(), RenderError> {
        self.block(out, node, md)
    }

    /// Produce markup for an image reference, or `None` to leave the node to
    /// the engine's default handling (the "nothing rendered" signal).
    fn image(&mut self, _url: &str, _title: &str, _alt: &str) -> Option<String> {
        None
    }

    /// Render any other block by delegating the whole subtree to the engine.
    fn block<'a>(
        &mut self,
        out: &mut String,
        node: &'a AstNode<'a>,
        md: &ComrakOptions<'_>,
    ) -> Result<(), RenderError> {
        delegate_to_engine(node, md, out)
    }
}

/// Format a subtree with comrak's HTML formatter, appending to `out`.
pub fn delegate_to_engine<'a>(
    node: &'a AstNode<'a>,
    md: &ComrakOptions<'_>,
    out: &mut String,
) -> Result<(), RenderError> {
    let mut buf = Vec::new();
    format_html(node, md, &mut buf).map_err(|e| RenderError::Engine(e.to_string()))?;
    let html = String::from_utf8(buf).map_err(|e| RenderError::Serialization(e.to_string()))?;
    out.push_str(&html);
    Ok(())
}

/// Drive one render over a parsed document.
///
/// Order is fixed: document header, image rewrite, every top-level block in
/// document order, document footer. Frontmatter blocks are consumed by
/// metadata extraction and skipped here.
pub fn render_document<'a, R: BlockRenderer>(
    renderer: &mut R,
    root: &'a AstNode<'a>,
    meta: Option<&DocumentMetadata>,
    md: &ComrakOptions<'_>,
    out: &mut String,
) -> Result<(), RenderError> {
    renderer.document_header(out, meta);
    rewrite_images(renderer, root);

    enum Slot {
        Skip,
        Heading(u8),
        Rule,
        Other,
    }

    for node in root.children() {
        let slot = match &node.data.borrow().value {
            NodeValue::FrontMatter(_) => Slot::Skip,
            NodeValue::Heading(heading) => Slot::Heading(heading.level),
            NodeValue::ThematicBreak => Slot::Rule,
            _ => Slot::Other,
        };
        match slot {
            Slot::Skip => {}
            Slot::Heading(level) => renderer.heading(out, node, level, md)?,
            Slot::Rule => renderer.thematic_break(out, node, md)?,
            Slot::Other => renderer.block(out, node, md)?,
        }
    }

    renderer.document_footer(out);
    Ok(())
}

/// Replace every image node the renderer claims with raw markup.
///
/// Images are inline and can sit arbitrarily deep (paragraphs, headings,
/// list items), so the rewrite runs over the whole tree before the block
/// walk. A claimed node loses its children (the alt text has already been
/// folded into the markup) and becomes an `HtmlInline` literal, which the
/// engine then emits verbatim.
fn rewrite_images<'a, R: BlockRenderer>(renderer: &mut R, root: &'a AstNode<'a>) {
    let images: Vec<_> = root
        .descendants()
        .filter(|n| matches!(n.data.borrow().value, NodeValue::Image(..)))
        .collect();

    for node in images {
        let (url, title) = match &node.data.borrow().value {
            NodeValue::Image(link) => (link.url.clone(), link.title.clone()),
            _ => continue,
        };
        let alt = collect_text(node);

        if let Some(markup) = renderer.image(&url, &title, &alt) {
            let children: Vec<_> = node.children().collect();
            for child in children {
                child.detach();
            }
            node.data.borrow_mut().value = NodeValue::HtmlInline(markup);
        }
    }
}

/// Collect the plain-text content of a subtree (used for image alt text).
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    collect_text_into(node, &mut text);
    text
}

fn collect_text_into<'a>(node: &'a AstNode<'a>, output: &mut String) {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(text) => output.push_str(text),
            NodeValue::Code(code) => output.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
            _ => collect_text_into(child, output),
        }
    }
}
