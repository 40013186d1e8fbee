//! Line scanner: splits input into lines and measures indentation.

use crate::Range;

/// A single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// The whole line, without its terminator (`\n` or `\r\n`).
    pub raw: Range,
    /// Leading whitespace width in columns (tabs count as `tab_width`).
    pub indent: usize,
    /// Content from the first to the last non-whitespace byte.
    /// Empty for blank lines.
    pub content: Range,
}

impl Line {
    /// Whether the line is empty or whitespace only.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    /// Byte offset of the first non-whitespace byte.
    #[inline]
    pub fn content_start(&self) -> usize {
        self.content.start_usize()
    }
}

/// Lazy iterator over the lines of an input buffer.
///
/// Cloning the scanner restarts from the clone's position, so a scan can be
/// replayed without re-reading the input.
///
/// # Example
/// ```
/// use listmark::block::LineScanner;
///
/// let input = b"- A\n    - A1";
/// let lines: Vec<_> = LineScanner::new(input, 4).collect();
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[1].indent, 4);
/// assert_eq!(lines[1].content.slice(input), b"- A1");
/// ```
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    input: &'a [u8],
    pos: usize,
    tab_width: usize,
}

impl<'a> LineScanner<'a> {
    /// Create a scanner over `input`, expanding each tab to `tab_width` columns.
    pub fn new(input: &'a [u8], tab_width: usize) -> Self {
        Self {
            input,
            pos: 0,
            tab_width,
        }
    }

    fn measure(&self, start: usize, end: usize) -> Line {
        let mut indent = 0;
        let mut content_start = start;
        while content_start < end {
            match self.input[content_start] {
                b' ' => indent += 1,
                b'\t' => indent += self.tab_width,
                _ => break,
            }
            content_start += 1;
        }

        let mut content_end = end;
        while content_end > content_start && is_space_or_tab(self.input[content_end - 1]) {
            content_end -= 1;
        }

        Line {
            raw: Range::from_usize(start, end),
            indent,
            content: Range::from_usize(content_start, content_end),
        }
    }
}

impl Iterator for LineScanner<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let (mut end, next) = match memchr::memchr(b'\n', &self.input[start..]) {
            Some(offset) => (start + offset, start + offset + 1),
            None => (self.input.len(), self.input.len()),
        };
        self.pos = next;

        if end > start && self.input[end - 1] == b'\r' {
            end -= 1;
        }

        Some(self.measure(start, end))
    }
}

#[inline]
pub(crate) fn is_space_or_tab(b: u8) -> bool {
    b == b' ' || b == b'\t'
}
