//! Marker matcher: classifies a scanned line for the list builder.

use crate::Range;
use crate::limits::MAX_LIST_MARKER_DIGITS;

use super::line::{Line, is_space_or_tab};
use super::list::{Marker, MarkerKind};

/// Why a line ends the current list region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// Empty or whitespace-only line.
    Blank,
    /// Non-list content while no list is open; belongs to another block type.
    Foreign,
}

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// `1. text` or `1) text`.
    OrderedStart(Marker),
    /// `- text`, `* text` or `+ text`.
    UnorderedStart(Marker),
    /// Text appended to the innermost open item.
    Continuation {
        /// The line's trimmed content.
        text: Range,
        /// The line looked like a marker but was rejected (e.g. `-Two`,
        /// `3!. Two`, or ten digits).
        malformed: bool,
    },
    /// The line closes every open list.
    Terminator(Terminator),
}

impl LineClass {
    /// The marker, if this line starts an item.
    pub fn marker(&self) -> Option<Marker> {
        match *self {
            Self::OrderedStart(marker) | Self::UnorderedStart(marker) => Some(marker),
            Self::Continuation { .. } | Self::Terminator(_) => None,
        }
    }
}

/// Classify `line` given whether a list is currently open.
///
/// # Example
/// ```
/// use listmark::block::{classify, LineClass, LineScanner};
///
/// let input = b"12. Twelve";
/// let line = LineScanner::new(input, 4).next().unwrap();
/// assert!(matches!(classify(&line, input, 4, false), LineClass::OrderedStart(_)));
/// ```
pub fn classify(line: &Line, input: &[u8], tab_width: usize, list_open: bool) -> LineClass {
    if line.is_blank() {
        return LineClass::Terminator(Terminator::Blank);
    }

    if let Some(marker) = match_unordered(line, input, tab_width) {
        return LineClass::UnorderedStart(marker);
    }
    if let Some(marker) = match_ordered(line, input, tab_width) {
        return LineClass::OrderedStart(marker);
    }

    if !list_open {
        return LineClass::Terminator(Terminator::Foreign);
    }

    let first = input[line.content_start()];
    LineClass::Continuation {
        text: line.content,
        malformed: first.is_ascii_digit() || is_bullet(first),
    }
}

#[inline]
fn is_bullet(b: u8) -> bool {
    matches!(b, b'-' | b'*' | b'+')
}

fn match_unordered(line: &Line, input: &[u8], tab_width: usize) -> Option<Marker> {
    let content = line.content.slice(input);
    let bullet = *content.first()?;
    if !is_bullet(bullet) {
        return None;
    }
    let (text, spacing) = text_after_marker(line, input, 1, tab_width)?;
    Some(Marker {
        kind: MarkerKind::Unordered { bullet },
        indent: line.indent,
        content_column: line.indent + 1 + spacing,
        text,
    })
}

fn match_ordered(line: &Line, input: &[u8], tab_width: usize) -> Option<Marker> {
    let content = line.content.slice(input);

    let digits = content.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || digits > MAX_LIST_MARKER_DIGITS {
        return None;
    }

    let delimiter = *content.get(digits)?;
    if delimiter != b'.' && delimiter != b')' {
        return None;
    }

    // At most nine digits, so this cannot overflow a u32.
    let number = content[..digits]
        .iter()
        .fold(0u32, |n, &d| n * 10 + u32::from(d - b'0'));

    let marker_len = digits + 1;
    let (text, spacing) = text_after_marker(line, input, marker_len, tab_width)?;
    Some(Marker {
        kind: MarkerKind::Ordered { number, delimiter },
        indent: line.indent,
        content_column: line.indent + marker_len + spacing,
        text,
    })
}

/// Text after a `marker_len`-byte marker, and the width of the whitespace
/// separating them. `None` if the marker is not followed by whitespace.
fn text_after_marker(
    line: &Line,
    input: &[u8],
    marker_len: usize,
    tab_width: usize,
) -> Option<(Range, usize)> {
    let after = line.content_start() + marker_len;
    let raw_end = line.raw.end_usize();
    if after >= raw_end || !is_space_or_tab(input[after]) {
        return None;
    }

    let mut pos = after;
    let mut spacing = 0;
    while pos < raw_end && is_space_or_tab(input[pos]) {
        spacing += if input[pos] == b'\t' { tab_width } else { 1 };
        pos += 1;
    }

    // Whitespace-only remainder: empty first segment.
    let end = line.content.end_usize().max(pos);
    Some((Range::from_usize(pos.min(end), end), spacing))
}
