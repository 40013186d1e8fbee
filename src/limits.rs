//! Parser limits and defaults.
//!
//! Nesting depth is deliberately absent: the list builder keeps its frames
//! on the heap, so arbitrarily deep input is handled without a cap.

/// Maximum digits in ordered list marker (prevents big-integer parsing).
/// A run of ten or more digits is never a marker.
pub const MAX_LIST_MARKER_DIGITS: usize = 9;

/// Columns a tab counts for when measuring indentation.
pub const DEFAULT_TAB_WIDTH: usize = 4;
