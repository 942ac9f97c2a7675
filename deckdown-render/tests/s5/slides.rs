//! Slide boundary tests over the full pipeline.
//!
//! Every render also carries the title slide from the document chrome, so
//! the expected `<div class="slide">` counts below are one higher than the
//! number of body slides.

use deckdown_render::{render_slideshow, slide_count, S5Options};

fn render(md: &str) -> String {
    render_slideshow(md, &S5Options::default()).unwrap()
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn each_toplevel_heading_opens_a_slide() {
    let html = render("# Intro\n\n# Details\n");

    assert_eq!(count(&html, "<div class=\"slide\">"), 3);

    let intro = html.find("<h1>Intro</h1>").unwrap();
    let details = html.find("<h1>Details</h1>").unwrap();
    assert!(intro < details);
    // Exactly one close-then-open boundary between the two slides.
    assert_eq!(count(&html[intro..details], "</div>\n<div class=\"slide\">"), 1);
}

#[test]
fn rule_starts_a_new_slide_without_an_hr() {
    let html = render("# One\n\ntext\n\n---\n\nmore\n");

    assert!(!html.contains("<hr"));
    assert_eq!(count(&html, "<div class=\"slide\">"), 3);

    let text = html.find("<p>text</p>").unwrap();
    let more = html.find("<p>more</p>").unwrap();
    assert_eq!(count(&html[text..more], "</div>\n<div class=\"slide\">"), 1);
}

#[test]
fn rule_at_document_start_opens_the_first_slide() {
    let html = render("---\n\ntext\n");
    assert_eq!(count(&html, "<div class=\"slide\">"), 2);
    let open = html.rfind("<div class=\"slide\">").unwrap();
    let text = html.find("<p>text</p>").unwrap();
    assert!(open < text);
}

#[test]
fn subheadings_stay_inside_the_current_slide() {
    let html = render("# Talk\n\n## Part One\n\n### Detail\n");
    assert_eq!(count(&html, "<div class=\"slide\">"), 2);
    assert!(html.contains("<h2>Part One</h2>"));
    assert!(html.contains("<h3>Detail</h3>"));
}

#[test]
fn divs_are_balanced_for_any_slide_count() {
    for md in ["", "no slides here\n", "# One\n", "# One\n\n---\n\n# Two\n"] {
        let html = render(md);
        assert_eq!(count(&html, "<div"), count(&html, "</div>"), "input: {md:?}");
    }
}

#[test]
fn slide_count_matches_the_rendered_output() {
    let md = "# One\n\ntext\n\n---\n\n# Two\n";
    let html = render(md);
    // Body slides plus the title slide.
    assert_eq!(count(&html, "<div class=\"slide\">"), slide_count(md) + 1);
}
