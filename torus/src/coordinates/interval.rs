// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::Precision;

/// Closed-open 1-D range `[begin, end)` along one axis.
///
/// ```text
///           begin                 end (excluded)
///             ↓                    ↓
///   ... ─┬───┬───┬───┬───┬───┬───┬───┬─ ...
///        │   │ ■ │ ■ │ ■ │ ■ │ ■ │   │
///   ... ─┴───┴───┴───┴───┴───┴───┴───┴─ ...
///             └──── len = 5 ────┘
/// ```
///
/// An interval with `end <= begin` is empty. [`RingMapping::split`] normalizes every
/// empty piece to [`Interval::empty()`].
///
/// [`RingMapping::split`]: crate::RingMapping::split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interval<P: Precision> {
    pub begin: P,
    pub end: P,
}

/// Shorthand constructor for [`Interval`].
///
/// ```
/// use r3bl_torus::interval;
/// let it = interval(3_i64, 8);
/// assert_eq!(it.len(), 5);
/// ```
pub fn interval<P: Precision>(begin: P, end: P) -> Interval<P> { Interval { begin, end } }

impl<P: Precision> Interval<P> {
    /// The canonical empty interval `[0, 0)`.
    #[must_use]
    pub fn empty() -> Self { interval(P::ZERO, P::ZERO) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.end <= self.begin }

    /// Number of coordinates covered. Zero for an empty interval, never negative.
    /// Saturates at `P::MAX`.
    #[must_use]
    pub fn len(&self) -> P {
        if self.is_empty() {
            P::ZERO
        } else {
            self.end.saturating_sub(self.begin)
        }
    }

    #[must_use]
    pub fn contains(&self, value: P) -> bool { self.begin <= value && value < self.end }

    /// Replace an empty interval with [`Interval::empty()`], keep a non-empty one as is.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.is_empty() { Self::empty() } else { self }
    }
}

impl<P: Precision> From<(P, P)> for Interval<P> {
    fn from((begin, end): (P, P)) -> Self { interval(begin, end) }
}

impl<P: Precision> Display for Interval<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_len() {
        assert!(Interval::<i32>::empty().is_empty());
        assert_eq!(Interval::<i32>::empty().len(), 0);
        assert!(interval(5, 5).is_empty());
        assert!(interval(6, 5).is_empty());
        assert_eq!(interval(6, 5).len(), 0);
        assert_eq!(interval(-2, 5).len(), 7);
        assert_eq!(interval(-100_i8, 100).len(), i8::MAX);
    }

    #[test]
    fn test_contains_excludes_end() {
        let it = interval(3_i64, 8);
        assert!(!it.contains(2));
        assert!(it.contains(3));
        assert!(it.contains(7));
        assert!(!it.contains(8));
    }

    #[test]
    fn test_normalized() {
        assert_eq!(interval(9, 4).normalized(), Interval::empty());
        assert_eq!(interval(4, 9).normalized(), interval(4, 9));
    }

    #[test]
    fn test_display() {
        assert_eq!(interval(-1_i16, 4).to_string(), "[-1, 4)");
    }
}
