//! HTML output: a reusable byte writer and the list tree renderer.
//!
//! Output is compact: no newlines between tags.

use crate::block::{Block, List, ListItem, ListKind};
use crate::{Options, Range, escape};

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use listmark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.ul_start();
/// writer.li_start();
/// writer.write_escaped_text(b"a < b");
/// writer.li_end();
/// writer.ul_end();
/// assert_eq!(writer.into_string(), "<ul><li>a &lt; b</li></ul>");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with capacity for rendering an input of `input_len` bytes.
    ///
    /// Tags add roughly a quarter on top of the text for list-heavy input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    /// Write raw bytes without escaping.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Write a static string.
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        self.out.push(b);
    }

    /// Write text with HTML escaping.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &[u8]) {
        escape::escape_text_into(&mut self.out, text);
    }

    /// Write item or paragraph text, escaped or verbatim per `options`.
    #[inline]
    pub fn write_text(&mut self, text: &[u8], options: &Options) {
        if options.escape_text {
            self.write_escaped_text(text);
        } else {
            self.write_bytes(text);
        }
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: only ASCII tags and slices of `&str` input cut at ASCII
        // boundaries are ever written
        unsafe { std::str::from_utf8_unchecked(&self.out) }
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: see `as_str`
        unsafe { String::from_utf8_unchecked(self.out) }
    }

    /// Get mutable reference to internal buffer.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut Vec<u8> {
        &mut self.out
    }

    // --- List and paragraph tags ---

    /// Write list start (unordered): `<ul>`
    #[inline]
    pub fn ul_start(&mut self) {
        self.write_str("<ul>");
    }

    /// Write list end (unordered): `</ul>`
    #[inline]
    pub fn ul_end(&mut self) {
        self.write_str("</ul>");
    }

    /// Write list start (ordered): `<ol>` or `<ol start="N">`
    #[inline]
    pub fn ol_start(&mut self, start: u32) {
        if start == 1 {
            self.write_str("<ol>");
        } else {
            self.write_str("<ol start=\"");
            self.write_u32(start);
            self.write_str("\">");
        }
    }

    /// Write list end (ordered): `</ol>`
    #[inline]
    pub fn ol_end(&mut self) {
        self.write_str("</ol>");
    }

    /// Write list item start: `<li>`
    #[inline]
    pub fn li_start(&mut self) {
        self.write_str("<li>");
    }

    /// Write list item end: `</li>`
    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>");
    }

    /// Write paragraph start: `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p>");
    }

    /// Write paragraph end: `</p>`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>");
    }

    /// Write a u32 as decimal.
    fn write_u32(&mut self, mut n: u32) {
        let mut buf = [0u8; 10]; // Max digits for u32
        let mut i = buf.len();
        loop {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        self.write_bytes(&buf[i..]);
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Pending work for the list walk.
enum Step<'t> {
    OpenList(&'t List),
    Item(&'t ListItem),
    CloseItem,
    CloseList(ListKind),
}

/// Render a finalized list tree.
///
/// Walks the tree depth-first with an explicit stack, so arbitrarily deep
/// nesting renders without recursion.
pub fn render_list(writer: &mut HtmlWriter, input: &[u8], list: &List, options: &Options) {
    let mut stack = vec![Step::OpenList(list)];

    while let Some(step) = stack.pop() {
        match step {
            Step::OpenList(list) => {
                match list.kind {
                    ListKind::Ordered { start, .. } => writer.ol_start(start),
                    ListKind::Unordered { .. } => writer.ul_start(),
                }
                stack.push(Step::CloseList(list.kind));
                stack.extend(list.items.iter().rev().map(Step::Item));
            }
            Step::Item(item) => {
                writer.li_start();
                write_joined(writer, input, &item.segments, options);
                stack.push(Step::CloseItem);
                stack.extend(item.children.iter().rev().map(Step::OpenList));
            }
            Step::CloseItem => writer.li_end(),
            Step::CloseList(ListKind::Ordered { .. }) => writer.ol_end(),
            Step::CloseList(ListKind::Unordered { .. }) => writer.ul_end(),
        }
    }
}

/// Render a top-level block.
pub fn render_block(writer: &mut HtmlWriter, input: &[u8], block: &Block, options: &Options) {
    match block {
        Block::List(list) => render_list(writer, input, list, options),
        Block::Paragraph(lines) => {
            writer.paragraph_start();
            write_joined(writer, input, lines, options);
            writer.paragraph_end();
        }
    }
}

/// Write non-empty segments separated by single spaces.
fn write_joined(writer: &mut HtmlWriter, input: &[u8], segments: &[Range], options: &Options) {
    let mut first = true;
    for segment in segments.iter().filter(|s| !s.is_empty()) {
        if !first {
            writer.write_byte(b' ');
        }
        writer.write_text(segment.slice(input), options);
        first = false;
    }
}
