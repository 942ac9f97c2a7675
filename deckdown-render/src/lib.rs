//! Markdown to S5 slideshow rendering
//!
//!     This crate turns Markdown documents into S5 slideshow HTML. S5 is the
//!     classic single-file slideshow format: one XHTML document where every
//!     slide is a `<div class="slide">` inside a presentation container, and
//!     the `ui/` stylesheets and `slides.js` do the projection work.
//!
//!     TLDR for contributors:
//!         - We never parse Markdown ourselves. comrak owns the block tree,
//!           inline dispatch and the default HTML rendering of every block.
//!         - This crate only decides slide boundaries, emits the document
//!           chrome (preamble, title slide, footer) and overrides a handful
//!           of block renderings. Everything else is delegated.
//!         - Slide boundaries are level-1 headings and thematic breaks, in
//!           document order. The tracking is a single monotonic counter.
//!
//! Architecture
//!
//!     The file structure:
//!     .
//!     ├── error.rs            # RenderError
//!     ├── escape.rs           # HTML text / href escaping primitives
//!     ├── renderer.rs         # BlockRenderer trait + single-pass driver
//!     ├── markdown
//!     │   ├── parser.rs       # comrak option set and parse entry point
//!     │   └── metadata.rs     # frontmatter -> DocumentMetadata
//!     └── s5
//!         ├── serializer.rs   # SlideRenderer (slide tracking, headings, images)
//!         ├── templates.rs    # preamble / title slide / footer
//!         └── dimensions.rs   # " =WxH" link suffix parser
//!
//!     The driver in renderer.rs walks the comrak tree exactly once, top to
//!     bottom, invoking BlockRenderer callbacks in document order. The trait's
//!     default method bodies delegate to comrak's own HTML formatter; the S5
//!     serializer overrides only the heading, thematic-break, document-header,
//!     document-footer and image slots. The division of labor is strict: the
//!     engine does the hard part, this layer is decoration and bookkeeping.
//!
//! Library Choices
//!
//!     comrak does everything Markdown. For the pieces comrak does not own we
//!     stay small: templates are plain `format!` substitution, href escaping
//!     uses percent-encoding, text escaping is a replace chain. This is a pure
//!     lib: no std prints, no env vars, no shell assumptions. The deckdown
//!     CLI is the shell.

pub mod error;
pub mod escape;
pub mod markdown;
pub mod renderer;
pub mod s5;

pub use error::RenderError;
pub use markdown::metadata::DocumentMetadata;
pub use renderer::BlockRenderer;
pub use s5::{parse_metadata, render_slideshow, slide_count, S5Options};
