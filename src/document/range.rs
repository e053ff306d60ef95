use core::{fmt, ops::Range};

use serde::{Deserialize, Serialize};

/// A half-open interval `[location, location + length)` of character indices.
///
/// Ranges are not bound to any buffer; call [`StringRange::fit_in`] to clamp one
/// to a text length before indexing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringRange {
    location: usize,
    length: usize,
}

impl StringRange {
    #[must_use]
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Range covering `start..end`; an inverted pair yields an empty range at `start`.
    #[must_use]
    pub const fn from_bounds(start: usize, end: usize) -> Self {
        Self {
            location: start,
            length: end.saturating_sub(start),
        }
    }

    #[must_use]
    pub const fn location(&self) -> usize {
        self.location
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.location.saturating_add(self.length)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        self.location..self.end()
    }

    /// Clamp both bounds into `[0, buffer_length]`.
    #[must_use]
    pub fn fit_in(&self, buffer_length: usize) -> Self {
        let location = self.location.min(buffer_length);
        let end = self.end().clamp(location, buffer_length);
        Self::from_bounds(location, end)
    }

    /// Move the range by `delta` characters, stopping at zero.
    #[must_use]
    pub const fn offset(&self, delta: isize) -> Self {
        Self {
            location: self.location.saturating_add_signed(delta),
            length: self.length,
        }
    }

    /// Whether `other` lies inside this range.
    ///
    /// The end bound is strict: a range ending exactly where `self` ends is
    /// not contained.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.location <= other.location && other.end() < self.end()
    }

    #[must_use]
    pub const fn contains_index(&self, index: usize) -> bool {
        index >= self.location && index < self.end()
    }

    #[must_use]
    pub const fn intersects(&self, other: Self) -> bool {
        self.location < other.end() && other.location < self.end()
    }
}

impl From<Range<usize>> for StringRange {
    fn from(range: Range<usize>) -> Self {
        Self::from_bounds(range.start, range.end)
    }
}

impl fmt::Display for StringRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.location, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_in_clamps_end() {
        assert_eq!(StringRange::new(5, 3).fit_in(6), StringRange::new(5, 1));
    }

    #[test]
    fn fit_in_clamps_location_past_buffer() {
        assert_eq!(StringRange::new(9, 4).fit_in(6), StringRange::new(6, 0));
    }

    #[test]
    fn fit_in_keeps_range_inside_buffer() {
        assert_eq!(StringRange::new(1, 2).fit_in(6), StringRange::new(1, 2));
    }

    #[test]
    fn offset_preserves_length() {
        let moved = StringRange::new(4, 2).offset(3);
        assert_eq!(moved, StringRange::new(7, 2));
        assert_eq!(StringRange::new(1, 2).offset(-5), StringRange::new(0, 2));
    }

    #[test]
    fn contains_uses_strict_end_bound() {
        let outer = StringRange::new(0, 10);
        assert!(outer.contains(StringRange::new(2, 3)));
        assert!(outer.contains(StringRange::new(0, 9)));
        assert!(!outer.contains(StringRange::new(5, 5)));
        assert!(!outer.contains(outer));
    }

    #[test]
    fn intersects_is_half_open() {
        let a = StringRange::new(0, 3);
        assert!(a.intersects(StringRange::new(2, 4)));
        assert!(!a.intersects(StringRange::new(3, 1)));
        assert!(!StringRange::new(3, 1).intersects(a));
    }

    #[test]
    fn from_std_range() {
        assert_eq!(StringRange::from(2..6), StringRange::new(2, 4));
        assert!(StringRange::from_bounds(6, 2).is_empty());
    }

    #[test]
    fn end_saturates() {
        let huge = StringRange::new(3, usize::MAX);
        assert_eq!(huge.end(), usize::MAX);
        assert_eq!(huge.fit_in(5), StringRange::new(3, 2));
    }

    #[test]
    fn display_shows_location_and_length() {
        assert_eq!(StringRange::new(5, 3).to_string(), "{5, 3}");
    }
}
