// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! 1-D ring mapping. See [`RingMapping`] for details.

use std::cmp::{max, min};

use smallvec::SmallVec;

use super::{DEBUG_TORUS_MAPPING, LinearPiece, LogicalMapping, MappingError};
use crate::{Interval, Precision, interval};

/// Maps a sliding logical interval `[start, start + length)` onto the fixed physical
/// range `[0, length)`.
///
/// When the logical interval is shifted, most of the mapping stays as it is. Only the
/// boundary moves, so the physical slots form a ring. Starting from a mapping of
/// `[0, l)`:
///
/// ```text
///   physical:  0   1   2   3  ...  l-1
///              ├───┼───┼───┼── ... ──┤
///   logical :  0   1   2   3  ...  l-1
/// ```
///
/// After a shift by `+1`, the represented interval is `[1, l+1)`. Logical `l` reuses
/// the physical slot that logical `0` vacated, nothing else moves:
///
/// ```text
///   physical:  0   1   2   3  ...  l-1
///              ├───┼───┼───┼── ... ──┤
///   logical :  l   1   2   3  ...  l-1
///              ↑
///              split (wrap seam)
/// ```
///
/// # State
///
/// | Field            | Meaning                                                  |
/// |------------------|----------------------------------------------------------|
/// | `length`         | Fixed capacity `L` of the physical axis, at least 1      |
/// | `start`          | Logical coordinate aligned to `physical_start`           |
/// | `physical_start` | Physical slot of `start`, always in `[0, L)`             |
/// | `split`          | Logical coordinate where physical addressing wraps to 0  |
///
/// `split` is always `start + ((L - physical_start) mod L)`, so it lies in the half-open
/// range `[start, start + L)`. When `physical_start` is 0 (eg, right after [`reset()`]) the
/// seam coincides with `start`, the first piece of [`split()`] is empty and the second
/// covers the whole range.
///
/// # Example
///
/// ```
/// use r3bl_torus::{RingMapping, interval, Interval};
///
/// let mut ring = RingMapping::<i64>::new(8);
/// ring.reset(0);
/// ring.shift(3);
///
/// assert_eq!(ring.get_interval(), interval(3, 11));
/// assert_eq!(ring.map(3), 3);
/// assert_eq!(ring.map(8), 0);
/// assert_eq!(ring.map(10), 2);
///
/// // [3, 11) crosses the seam at 8.
/// assert_eq!(ring.split(3, 11), [interval(3, 8), interval(8, 11)]);
/// // [3, 8) does not.
/// assert_eq!(ring.split(3, 8), [interval(3, 8), Interval::empty()]);
/// ```
///
/// # Precision limits
///
/// The window `[start, start + length)` must be representable in `P`. [`try_shift()`]
/// reports a shift that would move it past `P::MIN` or `P::MAX`. Every other
/// computation stays within `[0, length)` or inside the window, so any `length` up to
/// `P::MAX` works, eg: a `RingMapping<i8>` of length 100.
///
/// [`reset()`]: Self::reset
/// [`split()`]: Self::split
/// [`try_shift()`]: Self::try_shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RingMapping<P: Precision = i64> {
    length: P,
    start: P,
    physical_start: P,
    split: P,
}

impl<P: Precision> RingMapping<P> {
    /// Create a mapping from `[0, length)` to `[0, length)`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidCapacity`] if `length` is less than 1.
    pub fn try_new(length: P) -> Result<Self, MappingError> {
        if length < P::ONE {
            return Err(MappingError::InvalidCapacity {
                length: length.as_i128(),
            });
        }
        Ok(Self {
            length,
            start: P::ZERO,
            physical_start: P::ZERO,
            split: P::ZERO,
        })
    }

    /// Create a mapping from `[0, length)` to `[0, length)`.
    ///
    /// # Panics
    ///
    /// Panics if `length` is less than 1. Use [`Self::try_new`] to get an error instead.
    #[must_use]
    pub fn new(length: P) -> Self {
        match Self::try_new(length) {
            Ok(it) => it,
            Err(err) => panic!("{err}"),
        }
    }

    #[must_use]
    pub fn length(&self) -> P { self.length }

    #[must_use]
    pub fn start(&self) -> P { self.start }

    #[must_use]
    pub fn physical_start(&self) -> P { self.physical_start }

    /// The logical coordinate at which physical addressing wraps back to 0.
    #[must_use]
    pub fn split_point(&self) -> P { self.split }

    /// The logical interval `[start, start + length)` represented by this mapping.
    #[must_use]
    pub fn get_interval(&self) -> Interval<P> {
        interval(self.start, self.start + self.length)
    }

    #[must_use]
    pub fn contains(&self, x: P) -> bool { self.get_interval().contains(x) }

    /// Reset the mapping, such that `[begin, begin + length)` maps to `[0, length)`.
    ///
    /// Use this when the backing store has been fully repopulated, rather than
    /// incrementally shifted.
    ///
    /// # Panics
    ///
    /// Panics if `begin + length` is not representable in `P`. Use
    /// [`Self::try_reset`] to get an error instead.
    pub fn reset(&mut self, begin: P) {
        if let Err(err) = self.try_reset(begin) {
            panic!("{err}");
        }
    }

    /// Like [`Self::reset`], but leaves the mapping untouched and returns an error if
    /// the window starting at `begin` is not representable in `P`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::WindowOverflow`] if `begin + length` overflows `P`.
    pub fn try_reset(&mut self, begin: P) -> Result<(), MappingError> {
        if begin.checked_add(self.length).is_none() {
            return Err(MappingError::WindowOverflow {
                start: begin.as_i128(),
                offset: 0,
                length: self.length.as_i128(),
            });
        }

        self.start = begin;
        self.physical_start = P::ZERO;
        self.split = begin;

        if DEBUG_TORUS_MAPPING {
            // % is Display, ? is Debug.
            tracing::trace!(
                message = "RingMapping::reset",
                begin = %begin,
                length = %self.length
            );
        }

        Ok(())
    }

    /// Shift the logical interval by `offset` (positive is forward).
    ///
    /// Any magnitude is fine. Shifting by a multiple of `length` only advances `start`.
    /// Shifting by more than `length` makes all previously buffered content unreachable,
    /// and repopulating it is up to the caller.
    ///
    /// # Panics
    ///
    /// Panics if the shifted window is not representable in `P`. Use
    /// [`Self::try_shift`] to get an error instead.
    pub fn shift(&mut self, offset: P) {
        if let Err(err) = self.try_shift(offset) {
            panic!("{err}");
        }
    }

    /// Like [`Self::shift`], but leaves the mapping untouched and returns an error if
    /// the shifted window is not representable in `P`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::WindowOverflow`] if `start + offset` or
    /// `start + offset + length` overflows `P`.
    pub fn try_shift(&mut self, offset: P) -> Result<(), MappingError> {
        let window_overflow = MappingError::WindowOverflow {
            start: self.start.as_i128(),
            offset: offset.as_i128(),
            length: self.length.as_i128(),
        };
        let Some(start) = self.start.checked_add(offset) else {
            return Err(window_overflow);
        };
        if start.checked_add(self.length).is_none() {
            return Err(window_overflow);
        }

        self.start = start;
        self.physical_start =
            self.add_physical(self.physical_start, offset.modulo(self.length));
        self.split = self.start + (self.length - self.physical_start).modulo(self.length);

        if DEBUG_TORUS_MAPPING {
            // % is Display, ? is Debug.
            tracing::trace!(
                message = "RingMapping::shift",
                offset = %offset,
                start = %self.start,
                physical_start = %self.physical_start,
                split = %self.split
            );
        }

        Ok(())
    }

    /// `(lhs + rhs) mod length` for `lhs` and `rhs` in `[0, length)`, without forming a
    /// sum that can exceed `length`.
    fn add_physical(&self, lhs: P, rhs: P) -> P {
        let room = self.length - lhs;
        if rhs >= room { rhs - room } else { lhs + rhs }
    }

    /// Map a logical coordinate `x` to its physical coordinate in `[0, length)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside [`Self::get_interval`]. A wrong physical address would
    /// silently corrupt the backing store, so this is checked in every build profile.
    /// Use [`Self::try_map`] to get an error instead.
    #[must_use]
    pub fn map(&self, x: P) -> P {
        assert!(
            self.contains(x),
            "logical coordinate {x} is outside the mapped interval {}",
            self.get_interval()
        );
        self.map_unchecked(x)
    }

    /// Like [`Self::map`], but returns an error for coordinates outside the interval.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::OutOfInterval`] if `x` is outside [`Self::get_interval`].
    pub fn try_map(&self, x: P) -> Result<P, MappingError> {
        if self.contains(x) {
            Ok(self.map_unchecked(x))
        } else {
            let it = self.get_interval();
            Err(MappingError::OutOfInterval {
                coordinate: x.as_i128(),
                begin: it.begin.as_i128(),
                end: it.end.as_i128(),
            })
        }
    }

    fn map_unchecked(&self, x: P) -> P {
        self.add_physical(self.physical_start, x - self.start)
    }

    /// Split the logical interval `[begin, end)` into `[begin, split)` and
    /// `[split, end)`, such that the mapping within each piece is linear (it does not
    /// cross the end of the physical range).
    ///
    /// The input is first clamped to [`Self::get_interval`], so both pieces always lie
    /// inside the mapped window. Either piece can be empty, in which case it is set to
    /// [`Interval::empty()`]. A degenerate input (`end <= begin`) or one fully outside
    /// the window yields two empty pieces.
    #[must_use]
    pub fn split(&self, begin: P, end: P) -> [Interval<P>; 2] {
        let mapped = self.get_interval();
        let begin = max(begin, mapped.begin);
        let end = min(end, mapped.end);
        [
            interval(begin, min(self.split, end)).normalized(),
            interval(max(self.split, begin), end).normalized(),
        ]
    }

    /// The physical range of a linear piece returned by [`Self::split`]. An empty piece
    /// maps to [`Interval::empty()`].
    ///
    /// # Panics
    ///
    /// Panics if the piece is not inside [`Self::get_interval`], or if it crosses the
    /// wrap seam (ie, it was not produced by [`Self::split`]).
    #[must_use]
    pub fn map_linear(&self, piece: Interval<P>) -> Interval<P> {
        if piece.is_empty() {
            return Interval::empty();
        }
        let first = self.map(piece.begin);
        let last = self.map(piece.end - P::ONE);
        assert!(
            first <= last,
            "logical piece {piece} crosses the wrap seam at {}",
            self.split
        );
        interval(first, last + P::ONE)
    }

    /// Split `[begin, end)` and pair each non-empty piece with its physical range. This
    /// is what a bulk copy into the backing store iterates over.
    #[must_use]
    pub fn linear_pieces(
        &self,
        begin: P,
        end: P,
    ) -> SmallVec<[LinearPiece<Interval<P>>; 2]> {
        self.split(begin, end)
            .into_iter()
            .filter(|piece| !piece.is_empty())
            .map(|logical| LinearPiece {
                logical,
                physical: self.map_linear(logical),
            })
            .collect()
    }
}

impl<P: Precision> LogicalMapping for RingMapping<P> {
    type Coord = P;

    fn reset(&mut self, begin: P) { RingMapping::reset(self, begin); }

    fn shift(&mut self, offset: P) { RingMapping::shift(self, offset); }

    fn try_reset(&mut self, begin: P) -> Result<(), MappingError> {
        RingMapping::try_reset(self, begin)
    }

    fn try_shift(&mut self, offset: P) -> Result<(), MappingError> {
        RingMapping::try_shift(self, offset)
    }

    fn try_map(&self, logical: P) -> Result<P, MappingError> {
        RingMapping::try_map(self, logical)
    }
}
