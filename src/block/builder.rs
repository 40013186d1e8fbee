//! Nesting builder: turns classified lines into finalized list trees.
//!
//! The builder keeps a stack of open frames, innermost last. Each frame owns
//! the list under construction; its last item is the currently open item.
//! Frames are keyed by the column of the marker that opened them:
//!
//! - a start at a deeper column pushes a nested frame,
//! - a start at a shallower column pops frames until the top is at or left
//!   of it, however many levels that skips,
//! - a start at the same column either joins the list or, when the marker
//!   kind or delimiter differs, replaces it with a sibling list.
//!
//! Popping a frame moves its list into the open item of the frame below, or
//! into the top-level output when the stack is empty. Nothing recurses, so
//! nesting depth is bounded only by memory.

use crate::Range;

use super::list::{List, ListItem, ListKind, Marker};

/// An open list and the column it was established at.
#[derive(Debug)]
struct Frame {
    list: List,
    column: usize,
}

/// Builds list trees from a sequence of item starts and continuations.
///
/// # Example
/// ```
/// use listmark::block::{classify, LineScanner, ListBuilder};
///
/// let input = b"- A\n    - A1\n- B";
/// let mut builder = ListBuilder::new();
/// for line in LineScanner::new(input, 4) {
///     if let Some(marker) = classify(&line, input, 4, builder.is_open()).marker() {
///         builder.start_item(marker);
///     }
/// }
/// let lists = builder.finish();
/// assert_eq!(lists.len(), 1);
/// assert_eq!(lists[0].items.len(), 2);
/// assert_eq!(lists[0].items[0].children.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ListBuilder {
    frames: Vec<Frame>,
    finished: Vec<List>,
}

impl ListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any list is open.
    #[inline]
    pub fn is_open(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Column of the innermost open frame.
    #[inline]
    pub fn innermost_column(&self) -> Option<usize> {
        self.frames.last().map(|frame| frame.column)
    }

    /// Number of open frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Start a new item for `marker`, nesting, splitting or closing lists as
    /// its column and kind require.
    pub fn start_item(&mut self, marker: Marker) {
        let column = marker.indent;

        while self.frames.last().is_some_and(|top| top.column > column) {
            self.pop_frame();
        }

        match self.frames.last_mut() {
            Some(top) if top.column == column && top.list.kind.accepts(marker.kind) => {
                top.list.items.push(ListItem::new(marker.text));
                return;
            }
            Some(top) if top.column == column => {
                crate::trace!(column, from = ?top.list.kind, to = ?marker.kind, "homogeneity split");
                self.pop_frame();
            }
            _ => {}
        }

        self.push_frame(marker, column);
    }

    /// Append a text segment to the innermost open item.
    ///
    /// Returns `false` if no item is open; the text is then dropped.
    pub fn continue_item(&mut self, text: Range) -> bool {
        let Some(item) = self
            .frames
            .last_mut()
            .and_then(|frame| frame.list.items.last_mut())
        else {
            return false;
        };
        item.segments.push(text);
        true
    }

    /// Close every open frame, innermost first.
    pub fn terminate(&mut self) {
        while !self.frames.is_empty() {
            self.pop_frame();
        }
    }

    /// Take the top-level lists finalized so far, leaving the builder usable.
    pub fn take_lists(&mut self) -> Vec<List> {
        std::mem::take(&mut self.finished)
    }

    /// Close all frames and return every finalized top-level list in
    /// document order.
    pub fn finish(mut self) -> Vec<List> {
        self.terminate();
        self.take_lists()
    }

    fn push_frame(&mut self, marker: Marker, column: usize) {
        crate::trace!(column, depth = self.frames.len() + 1, kind = ?marker.kind, "open list");
        let mut list = List::new(ListKind::for_marker(marker.kind));
        list.items.push(ListItem::new(marker.text));
        self.frames.push(Frame { list, column });
    }

    fn pop_frame(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        crate::trace!(
            column = frame.column,
            items = frame.list.items.len(),
            "close list"
        );

        match self
            .frames
            .last_mut()
            .and_then(|parent| parent.list.items.last_mut())
        {
            Some(owner) => owner.children.push(frame.list),
            None => self.finished.push(frame.list),
        }
    }
}
