//! S5 output format tests
//!
//! End-to-end checks of the full slideshow pipeline: document chrome,
//! slide boundaries, and image markup.

mod export;
mod images;
mod slides;
