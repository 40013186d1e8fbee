//! Compact range representation for zero-copy text references.
//!
//! List items never copy their text: each segment is a pair of `u32`
//! offsets into the input buffer, which limits documents to 4GB.

/// Compact byte range into an input buffer.
///
/// # Example
/// ```
/// use listmark::Range;
///
/// let input = b"- One";
/// let range = Range::new(2, 5);
/// assert_eq!(range.slice(input), b"One");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize offsets.
    ///
    /// # Panics
    /// Panics in debug mode if either offset exceeds `u32::MAX`.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// The bytes this range covers.
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start as usize..self.end as usize]
    }

    /// The range as a str, or `None` if it does not fall on UTF-8 boundaries.
    #[inline]
    pub fn try_slice_str<'a>(&self, input: &'a [u8]) -> Option<&'a str> {
        std::str::from_utf8(self.slice(input)).ok()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }
}

impl From<std::ops::Range<usize>> for Range {
    #[inline]
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::from_usize(r.start, r.end)
    }
}
