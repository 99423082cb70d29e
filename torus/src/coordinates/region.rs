// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cmp::{max, min},
          fmt::{Display, Formatter}};

use super::{Interval, Point, Precision, interval, point};

/// Closed-open axis-aligned box. `min` is included, `max` is excluded on both axes.
///
/// ```text
///        min.x                    max.x (excluded)
///          ↓                        ↓
///  min.y → ┌────────────────────────┐
///          │ ■  ■  ■  ■  ■  ■  ■  ■ │
///          │ ■  ■  ■  ■  ■  ■  ■  ■ │
///  max.y → └────────────────────────┘  (excluded)
/// ```
///
/// A region with non-positive [`width()`] or [`height()`] is empty. The canonical empty
/// region is [`Region::empty()`], with all four coordinates set to zero.
///
/// [`width()`]: Region::width
/// [`height()`]: Region::height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region<P: Precision> {
    pub min: Point<P>,
    pub max: Point<P>,
}

/// Shorthand constructor for [`Region`].
///
/// ```
/// use r3bl_torus::{region, point};
/// let it = region(0_i64, 0, 3, 2);
/// assert_eq!(it.area(), 6);
/// assert!(it.contains(point(2, 1)));
/// assert!(!it.contains(point(3, 1)));
/// ```
pub fn region<P: Precision>(min_x: P, min_y: P, max_x: P, max_y: P) -> Region<P> {
    Region {
        min: point(min_x, min_y),
        max: point(max_x, max_y),
    }
}

impl<P: Precision> Region<P> {
    /// The canonical empty region `(0, 0, 0, 0)`.
    #[must_use]
    pub fn empty() -> Self { region(P::ZERO, P::ZERO, P::ZERO, P::ZERO) }

    /// Cartesian product of an x interval and a y interval.
    #[must_use]
    pub fn from_intervals(x: Interval<P>, y: Interval<P>) -> Self {
        region(x.begin, y.begin, x.end, y.end)
    }

    #[must_use]
    pub fn x_interval(&self) -> Interval<P> { interval(self.min.x, self.max.x) }

    #[must_use]
    pub fn y_interval(&self) -> Interval<P> { interval(self.min.y, self.max.y) }

    /// Saturates at `P::MAX` / `P::MIN` for boxes wider than `P` can express.
    #[must_use]
    pub fn width(&self) -> P { self.max.x.saturating_sub(self.min.x) }

    /// Saturates at `P::MAX` / `P::MIN` for boxes taller than `P` can express.
    #[must_use]
    pub fn height(&self) -> P { self.max.y.saturating_sub(self.min.y) }

    /// Number of cells covered. Zero for an empty region, never negative. Saturates at
    /// `P::MAX`, eg: a `200 × 200` region of `i16` reports `i16::MAX`.
    #[must_use]
    pub fn area(&self) -> P {
        if self.is_empty() {
            P::ZERO
        } else {
            self.width().saturating_mul(self.height())
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.max.x <= self.min.x || self.max.y <= self.min.y }

    /// `true` only for the canonical empty region.
    #[must_use]
    pub fn is_zero(&self) -> bool { *self == Self::empty() }

    #[must_use]
    pub fn contains(&self, p: Point<P>) -> bool {
        self.x_interval().contains(p.x) && self.y_interval().contains(p.y)
    }

    /// Empty regions never intersect anything. Two non-empty regions that merely touch
    /// along an edge don't intersect either, since `max` is excluded.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// The overlap of both regions, or [`Region::empty()`] when they don't intersect.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        if !self.intersects(other) {
            return Self::empty();
        }
        region(
            max(self.min.x, other.min.x),
            max(self.min.y, other.min.y),
            min(self.max.x, other.max.x),
            min(self.max.y, other.max.y),
        )
    }
}

impl<P: Precision> Display for Region<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.min.x, self.max.x, self.min.y, self.max.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_area_of_empty_regions_is_zero() {
        assert_eq2!(region(0_i32, 0, 0, 0).area(), 0);
        assert_eq2!(region(0_i32, 0, 4, 0).area(), 0);
        // Inverted boxes have a negative width but no area.
        assert_eq2!(region(5_i32, 0, 2, 4).area(), 0);
        assert_eq2!(region(-2_i32, -3, 2, 1).area(), 16);
    }

    #[test]
    fn test_area_saturates_instead_of_overflowing() {
        let it = region(0_i16, 0, 200, 200);
        assert!(!it.is_empty());
        assert_eq2!(it.area(), i16::MAX);

        let wide = region(-100_i8, 0, 100, 1);
        assert!(!wide.is_empty());
        assert_eq2!(wide.width(), i8::MAX);
        assert_eq2!(wide.area(), i8::MAX);
    }

    #[test]
    fn test_is_zero_vs_is_empty() {
        assert!(Region::<i64>::empty().is_zero());
        assert!(Region::<i64>::empty().is_empty());
        let degenerate = region(3_i64, 3, 3, 9);
        assert!(degenerate.is_empty());
        assert!(!degenerate.is_zero());
    }

    #[test]
    fn test_from_intervals_round_trips_axes() {
        let it = Region::from_intervals(interval(1_i32, 4), interval(-2, 2));
        assert_eq2!(it, region(1, -2, 4, 2));
        assert_eq2!(it.x_interval(), interval(1, 4));
        assert_eq2!(it.y_interval(), interval(-2, 2));
    }

    #[test]
    fn test_intersection() {
        let a = region(0_i32, 0, 4, 4);
        let b = region(2_i32, 3, 6, 8);
        assert!(a.intersects(&b));
        assert_eq2!(a.intersection(&b), region(2, 3, 4, 4));

        // Touching edges.
        let c = region(4_i32, 0, 6, 4);
        assert!(!a.intersects(&c));
        assert_eq2!(a.intersection(&c), Region::empty());

        // Empty regions.
        assert!(!a.intersects(&Region::empty()));
        assert!(!region(1_i32, 1, 1, 3).intersects(&a));
    }

    #[test]
    fn test_display() {
        assert_eq2!(region(0_i32, 1, 3, 4).to_string(), "[0, 3) x [1, 4)");
    }
}
