//! HTML text escaping for item and paragraph text.
//!
//! Only used when `Options::escape_text` is set; by default text is passed
//! through untouched for an inline renderer to handle. Scans with `memchr`
//! for the next escapable byte and bulk-copies everything in between.

use memchr::{memchr, memchr3};

/// Escape HTML text content into an output buffer.
///
/// Escapes `<`, `>`, `&` and `"`.
///
/// # Example
/// ```
/// use listmark::escape::escape_text_into;
///
/// let mut out = Vec::new();
/// escape_text_into(&mut out, b"a < b");
/// assert_eq!(out, b"a &lt; b");
/// ```
#[inline]
pub fn escape_text_into(out: &mut Vec<u8>, input: &[u8]) {
    let mut rest = input;
    while let Some(pos) = first_text_escape(rest) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(entity_for(rest[pos]));
        rest = &rest[pos + 1..];
    }
    out.extend_from_slice(rest);
}

/// Check if a byte slice needs any escaping.
#[inline]
pub fn needs_text_escape(input: &[u8]) -> bool {
    first_text_escape(input).is_some()
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr(b'"', input);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

#[inline]
fn entity_for(b: u8) -> &'static [u8] {
    match b {
        b'<' => b"&lt;",
        b'>' => b"&gt;",
        b'&' => b"&amp;",
        _ => b"&quot;",
    }
}
