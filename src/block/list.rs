//! List tree types.

use smallvec::SmallVec;

use crate::Range;

/// The shape of a recognized list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `1.` or `1)` style marker.
    Ordered {
        /// Written number (at most 9 digits).
        number: u32,
        /// Delimiter character (`.` or `)`).
        delimiter: u8,
    },
    /// `-`, `*` or `+` bullet.
    Unordered {
        /// Bullet character.
        bullet: u8,
    },
}

/// A list marker recognized at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    /// Column of the marker's first character.
    pub indent: usize,
    /// Column of the first character after the marker and its whitespace.
    pub content_column: usize,
    /// Text following the marker (the item's first segment).
    pub text: Range,
}

/// Type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Unordered list with its bullet character.
    Unordered {
        /// Bullet character (`-`, `*` or `+`).
        bullet: u8,
    },
    /// Ordered list with starting number and delimiter.
    Ordered {
        /// Starting number (the first item's written number).
        start: u32,
        /// Delimiter character (`.` or `)`).
        delimiter: u8,
    },
}

impl ListKind {
    /// The kind of list a marker opens.
    pub fn for_marker(kind: MarkerKind) -> Self {
        match kind {
            MarkerKind::Ordered { number, delimiter } => Self::Ordered {
                start: number,
                delimiter,
            },
            MarkerKind::Unordered { bullet } => Self::Unordered { bullet },
        }
    }

    /// Whether an item with this marker may join a list of this kind.
    ///
    /// Ordered numbers are ignored; only the delimiter must match.
    pub fn accepts(self, marker: MarkerKind) -> bool {
        match (self, marker) {
            (Self::Unordered { bullet: a }, MarkerKind::Unordered { bullet: b }) => a == b,
            (Self::Ordered { delimiter: a, .. }, MarkerKind::Ordered { delimiter: b, .. }) => {
                a == b
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_ordered(self) -> bool {
        matches!(self, Self::Ordered { .. })
    }
}

/// A list item: text segments plus the lists nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Text segments, one per source line; rendered joined by spaces.
    pub segments: SmallVec<[Range; 2]>,
    /// Nested lists, in document order. Usually zero or one.
    pub children: Vec<List>,
}

impl ListItem {
    pub(crate) fn new(first: Range) -> Self {
        let mut segments = SmallVec::new();
        segments.push(first);
        Self {
            segments,
            children: Vec::new(),
        }
    }

    /// Item text with segments joined by single spaces.
    ///
    /// Returns `None` if the text does not fall on UTF-8 boundaries, which
    /// cannot happen for ranges produced from `&str` input.
    pub fn text(&self, input: &[u8]) -> Option<String> {
        let mut out = String::new();
        for segment in self.segments.iter().filter(|s| !s.is_empty()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(segment.try_slice_str(input)?);
        }
        Some(out)
    }
}

/// A finalized list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

impl List {
    pub(crate) fn new(kind: ListKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    /// Number of items in this list and all lists nested under it.
    pub fn item_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(list) = pending.pop() {
            count += list.items.len();
            pending.extend(list.items.iter().flat_map(|item| item.children.iter()));
        }
        count
    }

    /// Deepest nesting level, counting this list as 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut pending = vec![(self, 1usize)];
        while let Some((list, depth)) = pending.pop() {
            max = max.max(depth);
            for child in list.items.iter().flat_map(|item| item.children.iter()) {
                pending.push((child, depth + 1));
            }
        }
        max
    }
}

impl Drop for List {
    // Deep trees would otherwise recurse once per level while dropping.
    fn drop(&mut self) {
        let mut pending: Vec<List> = Vec::new();
        for item in &mut self.items {
            pending.append(&mut item.children);
        }
        while let Some(mut list) = pending.pop() {
            for item in &mut list.items {
                pending.append(&mut item.children);
            }
        }
    }
}
