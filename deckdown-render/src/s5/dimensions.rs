//! Parser for the `" =WxH"` image-link size suffix
//!
//! Image links may carry a trailing size marker, e.g. `photo.jpg =200x100`.
//! The scan anchors on the *last* `" ="` in the string because URLs can
//! legitimately contain `=`; that anchoring is part of the format. A URL
//! whose last `" ="` happens to be followed by `digits x digits` will match
//! as a size marker. That is an accepted limitation of the notation, kept
//! for compatibility, not something to fix here.

/// Split a link into `(url, width, height)` if it ends in a size suffix.
///
/// Grammar, scanning from the last `" ="`: one or more ASCII digits, a
/// literal `x`, one or more ASCII digits. Anything after the height digits
/// is silently ignored. Returns `None` when the suffix is absent or
/// malformed; callers fall back to treating the whole string as the URL.
pub fn parse_dimensions(link: &str) -> Option<(&str, &str, &str)> {
    let bytes = link.as_bytes();
    let marker = link.rfind(" =")?;

    let width_start = marker + 2;
    let mut i = width_start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == width_start {
        return None;
    }
    let width = &link[width_start..i];

    if i >= bytes.len() || bytes[i] != b'x' {
        return None;
    }

    let height_start = i + 1;
    let mut j = height_start;
    while j < bytes.len() && bytes[j].is_ascii_digit() {
        j += 1;
    }
    if j == height_start {
        return None;
    }
    let height = &link[height_start..j];

    Some((&link[..marker], width, height))
}
