//! Document chrome tests (preamble, title slide, footer)

use deckdown_render::{render_slideshow, S5Options};

fn render(md: &str) -> String {
    render_slideshow(md, &S5Options::default()).unwrap()
}

#[test]
fn document_carries_the_standard_chrome() {
    let html = render("# Intro\n\nHello.\n");

    assert!(html.starts_with("<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\""));
    assert!(html.contains("<html xmlns=\"http://www.w3.org/1999/xhtml\">"));
    assert!(html.contains("<title>S5: An Introduction</title>"));
    assert!(html.contains("<meta name=\"generator\" content=\"deckdown\" />"));
    assert!(html.contains("<link rel=\"stylesheet\" href=\"ui/default/slides.css\""));
    assert!(html.contains("<script src=\"ui/default/slides.js\" type=\"text/javascript\"></script>"));
    assert!(html.contains("<div class=\"layout\">"));
    assert!(html.contains("<div id=\"controls\"><!-- DO NOT EDIT --></div>"));
    assert!(html.contains("<div class=\"presentation\">"));
    assert!(html.ends_with("</div>\n</body>\n</html>\n"));
}

#[test]
fn missing_metadata_renders_empty_template_fields() {
    let html = render("# Intro\n");

    assert!(html.contains("<meta name=\"author\" content=\"\" />"));
    assert!(html.contains("<meta name=\"presdate\" content=\"\" />"));
    // Footer line with neither author nor date.
    assert!(html.contains("<h2> &#8226; </h2>"));
}

#[test]
fn metadata_flows_into_preamble_and_title_slide() {
    let md = "---\ntitle: My Talk\nauthor: Ada\ndate: 2026-08-29\n---\n\n# Intro\n";
    let html = render(md);

    assert!(html.contains("<meta name=\"author\" content=\"Ada\" />"));
    assert!(html.contains("<meta name=\"presdate\" content=\"2026-08-29\" />"));
    assert!(html.contains("<h2>Ada &#8226; 2026-08-29</h2>"));
    // Title slide.
    assert!(html.contains("<h1>My Talk</h1>\n<h2></h2>\n<h3>Ada</h3>\n<h4></h4>\n"));
}

#[test]
fn metadata_is_escaped_in_the_chrome() {
    let md = "---\ntitle: Fish & <Chips>\n---\n\nBody.\n";
    let html = render(md);
    assert!(html.contains("<h1>Fish &amp; &lt;Chips&gt;</h1>"));
    assert!(!html.contains("<h1>Fish & <Chips>"));
}

#[test]
fn footer_without_slides_closes_only_the_container() {
    let html = render("just a paragraph\n");
    assert!(html.ends_with("<p>just a paragraph</p>\n</div>\n</body>\n</html>\n"));
}

#[test]
fn footer_after_slides_closes_the_last_slide() {
    let html = render("# Only Slide\n");
    assert!(html.ends_with("</h1>\n</div>\n</div>\n</body>\n</html>\n"));
}

#[test]
fn empty_document_still_gets_a_title_slide() {
    let html = render("");
    assert_eq!(html.matches("<div class=\"slide\">").count(), 1);
    assert!(html.ends_with("</div>\n</body>\n</html>\n"));
}

#[test]
fn toc_option_numbers_headings_in_order() {
    let options = S5Options {
        toc: true,
        ..S5Options::default()
    };
    let html = render_slideshow("# First\n\n## Second\n\n# Third\n", &options).unwrap();
    assert!(html.contains("<h1 id=\"toc_0\">First</h1>"));
    assert!(html.contains("<h2 id=\"toc_1\">Second</h2>"));
    assert!(html.contains("<h1 id=\"toc_2\">Third</h1>"));
}
