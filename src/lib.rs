//! listmark: Markdown list parser and HTML renderer
//!
//! Recognizes ordered (`1.`, `1)`) and unordered (`-`, `*`, `+`) lists,
//! nests them by indentation, merges continuation lines into items, and
//! splits adjacent lists whenever the marker kind or delimiter changes.
//! Malformed markers never fail; they degrade to item text.
//!
//! # Design Principles
//! - Zero-copy: item text is kept as ranges into the input buffer
//! - Single pass: one line at a time, no lookahead
//! - No recursion: parsing, rendering and dropping all use explicit stacks
//! - Total: every UTF-8 input produces output
//!
//! Item text is passed through verbatim for an inline renderer to handle,
//! or HTML-escaped with [`Options::escape_text`].

/// Emit a `tracing` trace event when the `trace` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace")]
        ::tracing::trace!($($arg)*);
    };
}

pub(crate) use trace;

pub mod block;
pub mod escape;
pub mod limits;
pub mod range;
pub mod render;

// Re-export primary types
pub use block::{Block, BlockParser, List, ListItem, ListKind};
pub use range::Range;
pub use render::HtmlWriter;

/// Parsing/rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Columns a tab counts for in indentation.
    pub tab_width: usize,
    /// HTML-escape item and paragraph text instead of passing it through.
    pub escape_text: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tab_width: limits::DEFAULT_TAB_WIDTH,
            escape_text: false,
        }
    }
}

/// Render only the lists in `input` as HTML.
///
/// Non-list lines produce no output; an input without lists yields an
/// empty string.
///
/// # Example
/// ```
/// let html = listmark::render_lists("1. One\n2. Two");
/// assert_eq!(html, "<ol><li>One</li><li>Two</li></ol>");
/// ```
pub fn render_lists(input: &str) -> String {
    render_lists_with_options(input, &Options::default())
}

/// Render only the lists in `input` as HTML, with options.
pub fn render_lists_with_options(input: &str, options: &Options) -> String {
    let bytes = input.as_bytes();
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    for list in block::parse_lists(bytes, options) {
        render::render_list(&mut writer, bytes, &list, options);
    }
    writer.into_string()
}

/// Parse the lists in `input` into finalized trees.
///
/// Item segments are ranges into `input`.
pub fn parse_lists(input: &str, options: &Options) -> Vec<List> {
    block::parse_lists(input.as_bytes(), options)
}

/// Convert Markdown to HTML: lists plus plain paragraphs.
///
/// # Example
/// ```
/// let html = listmark::to_html("Groceries\n\n- Milk\n- Eggs");
/// assert_eq!(html, "<p>Groceries</p><ul><li>Milk</li><li>Eggs</li></ul>");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input.as_bytes(), &mut writer, options);
    writer.into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
pub fn to_html_into(input: &str, out: &mut Vec<u8>) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    let mut writer = HtmlWriter::with_capacity(0);
    std::mem::swap(writer.buffer_mut(), out);
    render_to_writer(input.as_bytes(), &mut writer, &Options::default());
    std::mem::swap(writer.buffer_mut(), out);
}

/// Render all blocks of `input` to an HtmlWriter.
fn render_to_writer(input: &[u8], writer: &mut HtmlWriter, options: &Options) {
    let mut parser = BlockParser::new_with_options(input, *options);
    let mut blocks = Vec::new();
    parser.parse(&mut blocks);

    for block in &blocks {
        render::render_block(writer, input, block, options);
    }
}
