//! Byte ranges into the statement text.

/// A half-open byte range `start..end` in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span sitting at `offset`.
    #[must_use]
    pub const fn empty_at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merges two spans into one that covers both.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// The span running from the start of `self` to the end of `last`.
    ///
    /// Unlike [`Span::merge`] this keeps the order the grammar saw the
    /// two ends in, which is what expression spans want.
    #[must_use]
    pub const fn to(self, last: Self) -> Self {
        Self::new(self.start, last.end)
    }

    /// Slices `source` by this span. Out-of-range spans yield `""`.
    #[must_use]
    pub fn text(self, source: &str) -> &str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_and_empty() {
        assert_eq!(Span::new(5, 10).len(), 5);
        assert!(Span::empty_at(5).is_empty());
        assert!(!Span::new(5, 10).is_empty());
    }

    #[test]
    fn test_span_merge() {
        let merged = Span::new(5, 10).merge(Span::new(8, 15));
        assert_eq!(merged, Span::new(5, 15));
    }

    #[test]
    fn test_span_to_keeps_order() {
        assert_eq!(Span::new(2, 4).to(Span::new(9, 12)), Span::new(2, 12));
    }

    #[test]
    fn test_span_text() {
        let sql = "SELECT a FROM t";
        assert_eq!(Span::new(7, 8).text(sql), "a");
        assert_eq!(Span::new(40, 50).text(sql), "");
    }
}
