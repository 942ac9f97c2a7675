//! Fixed document templates (preamble, title slide, closing tags)
//!
//! These are the S5 format's standard chrome: the XHTML 1.0 Strict preamble
//! with the `ui/default/` stylesheet and script links, the layout divs the
//! projection script expects, a title slide, and the closing tags. The only
//! variation is plain string substitution of the document metadata; there
//! are no conditional sections. Substituted values are HTML-escaped here —
//! frontmatter is author-controlled but the output must stay well-formed.
//!
//! Subtitle and company have no metadata source and always substitute as
//! empty strings.

use crate::escape::escape_html;
use crate::markdown::metadata::DocumentMetadata;

/// Closing tags emitted after the last slide.
pub const DOCUMENT_CLOSING: &str = "</div>\n</body>\n</html>\n";

/// Render the document preamble up to and including the opening of the
/// presentation container.
pub fn document_preamble(meta: Option<&DocumentMetadata>) -> String {
    let (title, author, date) = escaped_fields(meta);
    let company = "";

    format!(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN"
    "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">

<html xmlns="http://www.w3.org/1999/xhtml">

<head>
<title>S5: An Introduction</title>
<!-- metadata -->
<meta name="generator" content="deckdown" />
<meta name="author" content="{author}" />
<meta name="company" content="{company}" />
<meta name="presdate" content="{date}" />
<!-- configuration parameters -->
<meta name="defaultView" content="slideshow" />
<meta name="controlVis" content="hidden" />
<!-- style sheet links -->
<link rel="stylesheet" href="ui/default/slides.css" type="text/css" media="projection" id="slideProj" />
<link rel="stylesheet" href="ui/default/outline.css" type="text/css" media="screen" id="outlineStyle" />
<link rel="stylesheet" href="ui/default/print.css" type="text/css" media="print" id="slidePrint" />
<link rel="stylesheet" href="ui/default/opera.css" type="text/css" media="projection" id="operaFix" />
<!-- S5 JS -->
<script src="ui/default/slides.js" type="text/javascript"></script>
</head>
<body>

<div class="layout">
<div id="controls"><!-- DO NOT EDIT --></div>
<div id="currentSlide"><!-- DO NOT EDIT --></div>
<div id="header"></div>
<div id="footer">
<h1>{title}</h1>
<h2>{author} &#8226; {date}</h2>
</div>

</div>

<div class="presentation">
"#
    )
}

/// Render the title slide that opens every presentation.
pub fn title_slide(meta: Option<&DocumentMetadata>) -> String {
    let (title, author, _date) = escaped_fields(meta);
    let subtitle = "";
    let company = "";

    format!(
        "<div class=\"slide\">\n\
         <h1>{title}</h1>\n\
         <h2>{subtitle}</h2>\n\
         <h3>{author}</h3>\n\
         <h4>{company}</h4>\n\
         </div>\n"
    )
}

fn escaped_fields(meta: Option<&DocumentMetadata>) -> (String, String, String) {
    match meta {
        Some(meta) => (
            escape_html(&meta.title),
            escape_html(&meta.author),
            escape_html(&meta.date),
        ),
        None => (String::new(), String::new(), String::new()),
    }
}
