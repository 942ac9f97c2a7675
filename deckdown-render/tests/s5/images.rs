//! Image markup tests over the full pipeline.
//!
//! Destinations carrying a ` =WxH` suffix contain a space, so CommonMark
//! requires the `<...>` angle-bracket destination form in the source.

use deckdown_render::{render_slideshow, S5Options};

fn render(md: &str) -> String {
    render_slideshow(md, &S5Options::default()).unwrap()
}

#[test]
fn dimension_suffix_becomes_width_and_height() {
    let html = render("![A photo](<photo.jpg =200x100>)\n");
    assert!(html.contains("<img src=\"photo.jpg\" width=\"200\" height=\"100\" alt=\"A photo\"/>"));
    assert!(!html.contains("=200x100"));
}

#[test]
fn plain_image_keeps_the_whole_url() {
    let html = render("![diagram](chart.png)\n");
    assert!(html.contains("<img src=\"chart.png\" alt=\"diagram\"/>"));
}

#[test]
fn html_style_close_without_xhtml() {
    let options = S5Options {
        xhtml: false,
        ..S5Options::default()
    };
    let html = render_slideshow("![](photo.jpg)\n", &options).unwrap();
    assert!(html.contains("<img src=\"photo.jpg\" alt=\"\">"));
}

#[test]
fn image_title_is_carried() {
    let html = render("![alt](pic.png \"The Title\")\n");
    assert!(html.contains("<img src=\"pic.png\" title=\"The Title\" alt=\"alt\"/>"));
}

#[test]
fn alt_text_flattens_inline_markup() {
    let html = render("![a *styled* `alt`](pic.png)\n");
    assert!(html.contains("alt=\"a styled alt\""));
    // The nested nodes must not leak as rendered children.
    assert!(!html.contains("<em>styled</em>"));
}

#[test]
fn malformed_suffix_stays_in_the_url() {
    let html = render("![x](<photo.jpg =20x>)\n");
    assert!(html.contains("<img src=\"photo.jpg%20=20x\" alt=\"x\"/>"));
}

#[test]
fn image_inside_a_slide_body() {
    let html = render("# Slide\n\n![fig](<fig.png =64x64>)\n");
    let open = html.rfind("<div class=\"slide\">").unwrap();
    let img = html.find("<img src=\"fig.png\"").unwrap();
    assert!(open < img);
    assert!(html.contains("width=\"64\" height=\"64\""));
}
