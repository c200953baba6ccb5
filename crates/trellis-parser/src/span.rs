//! Byte ranges into description source text.

use std::ops::Range;

/// A half-open byte range `start..end` into the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Create a one-byte span at `offset`, clamped so it never extends past
    /// the end of a source of `source_len` bytes.
    pub fn at(offset: usize, source_len: usize) -> Self {
        let start = offset.min(source_len);
        let end = (start + 1).min(source_len);
        Self::new(start..end)
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_at_clamps_to_source() {
        assert_eq!(Span::at(3, 10), Span::new(3..4));
        assert_eq!(Span::at(10, 10), Span::new(10..10));
        assert_eq!(Span::at(42, 10), Span::new(10..10));
        assert!(Span::at(0, 0).is_empty());
    }

    #[test]
    fn test_span_new_never_inverts() {
        let (start, end) = (5, 2);
        let span = Span::new(start..end);
        assert_eq!(span.start(), 5);
        assert_eq!(span.len(), 0);
    }
}
