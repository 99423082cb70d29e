// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! 2-D torus mapping, composed of two independent [`RingMapping`]s. See
//! [`TorusMapping`] for details.

use smallvec::SmallVec;

use super::{DEBUG_TORUS_MAPPING, LinearPiece, LogicalMapping, MappingError, RingMapping};
use crate::{Axis, Point, Precision, Region, point};

/// Maps a logical 2-D region of size `width × height` onto the physical grid
/// `[0, width) × [0, height)`. When the logical region gets shifted, most of the mapping
/// stays as it is, only the boundary changes, thus forming a torus.
///
/// The x and y axes are fully independent, each is a [`RingMapping`]. So a region that
/// straddles both wrap seams is cut into (up to) four quadrants by [`split()`]:
///
/// ```text
///        logical region                     physical grid
///  ┌───────────┬──────────┐            ┌──────────┬───────────┐
///  │  [0] x0y0 │ [1] x1y0 │            │ [3] x1y1 │ [2] x0y1  │
///  │           │          │   map →    ├──────────┼───────────┤
///  ├───────────┼──────────┤            │ [1] x1y0 │ [0] x0y0  │
///  │  [2] x0y1 │ [3] x1y1 │            │          │           │
///  └───────────┴──────────┘            └──────────┴───────────┘
///              ↑ x seam                      (seams at 0)
/// ```
///
/// # Example
///
/// ```
/// use r3bl_torus::{TorusMapping, point, region};
///
/// let mut torus = TorusMapping::<i64>::new(4, 4);
/// torus.reset(point(0, 0));
/// torus.shift(point(1, 1));
///
/// assert_eq!(torus.get_region(), region(1, 1, 5, 5));
/// assert_eq!(torus.map(point(4, 4)), point(0, 0));
///
/// let pieces = torus.split(region(1, 1, 5, 5));
/// let total: i64 = pieces.iter().map(|it| it.area()).sum();
/// assert_eq!(total, 16);
/// ```
///
/// [`split()`]: Self::split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TorusMapping<P: Precision = i64> {
    x_ring: RingMapping<P>,
    y_ring: RingMapping<P>,
}

impl<P: Precision> TorusMapping<P> {
    /// Create a mapping from `[0, width) × [0, height)` to `[0, width) × [0, height)`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidCapacity`] if either dimension is less than 1.
    pub fn try_new(width: P, height: P) -> Result<Self, MappingError> {
        Ok(Self::from_rings(
            RingMapping::try_new(width)?,
            RingMapping::try_new(height)?,
        ))
    }

    /// Create a mapping from `[0, width) × [0, height)` to `[0, width) × [0, height)`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is less than 1. Use [`Self::try_new`] to get an error
    /// instead.
    #[must_use]
    pub fn new(width: P, height: P) -> Self {
        match Self::try_new(width, height) {
            Ok(it) => it,
            Err(err) => panic!("{err}"),
        }
    }

    #[must_use]
    pub fn from_rings(x_ring: RingMapping<P>, y_ring: RingMapping<P>) -> Self {
        Self { x_ring, y_ring }
    }

    #[must_use]
    pub fn x_ring(&self) -> &RingMapping<P> { &self.x_ring }

    #[must_use]
    pub fn y_ring(&self) -> &RingMapping<P> { &self.y_ring }

    /// Physical grid dimensions as `(width, height)`.
    #[must_use]
    pub fn size(&self) -> Point<P> { point(self.x_ring.length(), self.y_ring.length()) }

    /// The logical region represented by this mapping.
    #[must_use]
    pub fn get_region(&self) -> Region<P> {
        Region::from_intervals(self.x_ring.get_interval(), self.y_ring.get_interval())
    }

    #[must_use]
    pub fn contains(&self, p: Point<P>) -> bool {
        self.x_ring.contains(p.x) && self.y_ring.contains(p.y)
    }

    /// Map a logical point `p` to its physical coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside [`Self::get_region`]. Use [`Self::try_map`] to get an
    /// error instead.
    #[must_use]
    pub fn map(&self, p: Point<P>) -> Point<P> {
        point(self.x_ring.map(p.x), self.y_ring.map(p.y))
    }

    /// Like [`Self::map`], but returns an error for points outside the region.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::OutOfRegion`] naming the first axis (x before y) whose
    /// coordinate is outside the mapped region.
    pub fn try_map(&self, p: Point<P>) -> Result<Point<P>, MappingError> {
        let x = self.x_ring.try_map(p.x).map_err(|err| err.on_axis(Axis::X))?;
        let y = self.y_ring.try_map(p.y).map_err(|err| err.on_axis(Axis::Y))?;
        Ok(point(x, y))
    }

    /// Shift the region represented by this torus by `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the shifted region is not representable in `P`. Use
    /// [`Self::try_shift`] to get an error instead.
    pub fn shift(&mut self, offset: Point<P>) {
        if let Err(err) = self.try_shift(offset) {
            panic!("{err}");
        }
    }

    /// Like [`Self::shift`], but returns an error instead of panicking. Neither axis
    /// moves if either one fails.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::WindowOverflow`] if the shifted region is not
    /// representable in `P`.
    pub fn try_shift(&mut self, offset: Point<P>) -> Result<(), MappingError> {
        let (mut x_ring, mut y_ring) = (self.x_ring, self.y_ring);
        x_ring.try_shift(offset.x)?;
        y_ring.try_shift(offset.y)?;
        (self.x_ring, self.y_ring) = (x_ring, y_ring);

        if DEBUG_TORUS_MAPPING {
            // % is Display, ? is Debug.
            tracing::trace!(
                message = "TorusMapping::shift",
                offset = %offset,
                region = %self.get_region()
            );
        }

        Ok(())
    }

    /// Reset the mapping, such that
    /// `[begin.x, begin.x + width) × [begin.y, begin.y + height)` maps to
    /// `[0, width) × [0, height)`.
    ///
    /// # Panics
    ///
    /// Panics if that region is not representable in `P`. Use [`Self::try_reset`] to
    /// get an error instead.
    pub fn reset(&mut self, begin: Point<P>) {
        if let Err(err) = self.try_reset(begin) {
            panic!("{err}");
        }
    }

    /// Like [`Self::reset`], but returns an error instead of panicking. Neither axis
    /// changes if either one fails.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::WindowOverflow`] if the region at `begin` is not
    /// representable in `P`.
    pub fn try_reset(&mut self, begin: Point<P>) -> Result<(), MappingError> {
        let (mut x_ring, mut y_ring) = (self.x_ring, self.y_ring);
        x_ring.try_reset(begin.x)?;
        y_ring.try_reset(begin.y)?;
        (self.x_ring, self.y_ring) = (x_ring, y_ring);

        if DEBUG_TORUS_MAPPING {
            // % is Display, ? is Debug.
            tracing::trace!(
                message = "TorusMapping::reset",
                begin = %begin,
                size = %self.size()
            );
        }

        Ok(())
    }

    /// Split a logical region into four logical regions, such that the mapping in each
    /// of them is linear (ie, does not wrap around either torus seam).
    ///
    /// The pieces are ordered `x0y0, x1y0, x0y1, x1y1`, where `x0`/`x1` are the two
    /// pieces of [`RingMapping::split`] on the x axis and `y0`/`y1` on the y axis. Up to
    /// three of them can be empty, in which case they are set to [`Region::empty()`]. An
    /// empty piece on either axis empties both quadrants it participates in. Since each
    /// axis is clamped to the mapped window, a region fully outside it yields four empty
    /// pieces.
    #[must_use]
    pub fn split(&self, region: Region<P>) -> [Region<P>; 4] {
        let [x0, x1] = self.x_ring.split(region.min.x, region.max.x);
        let [y0, y1] = self.y_ring.split(region.min.y, region.max.y);

        [(x0, y0), (x1, y0), (x0, y1), (x1, y1)].map(|(x, y)| {
            let it = Region::from_intervals(x, y);
            if it.is_empty() { Region::empty() } else { it }
        })
    }

    /// The physical rectangle of a linear piece returned by [`Self::split`]. An empty
    /// piece maps to [`Region::empty()`].
    ///
    /// # Panics
    ///
    /// Panics if the piece is not inside [`Self::get_region`], or if it crosses either
    /// wrap seam.
    #[must_use]
    pub fn map_linear(&self, piece: Region<P>) -> Region<P> {
        if piece.is_empty() {
            return Region::empty();
        }
        Region::from_intervals(
            self.x_ring.map_linear(piece.x_interval()),
            self.y_ring.map_linear(piece.y_interval()),
        )
    }

    /// Split `region` and pair each non-empty quadrant with its physical rectangle. A
    /// blit into the backing store can then copy each piece row by row with contiguous
    /// slices.
    #[must_use]
    pub fn linear_pieces(&self, region: Region<P>) -> SmallVec<[LinearPiece<Region<P>>; 4]> {
        self.split(region)
            .into_iter()
            .filter(|piece| !piece.is_empty())
            .map(|logical| LinearPiece {
                logical,
                physical: self.map_linear(logical),
            })
            .collect()
    }
}

impl<P: Precision> LogicalMapping for TorusMapping<P> {
    type Coord = Point<P>;

    fn reset(&mut self, begin: Point<P>) { TorusMapping::reset(self, begin); }

    fn shift(&mut self, offset: Point<P>) { TorusMapping::shift(self, offset); }

    fn try_reset(&mut self, begin: Point<P>) -> Result<(), MappingError> {
        TorusMapping::try_reset(self, begin)
    }

    fn try_shift(&mut self, offset: Point<P>) -> Result<(), MappingError> {
        TorusMapping::try_shift(self, offset)
    }

    fn try_map(&self, logical: Point<P>) -> Result<Point<P>, MappingError> {
        TorusMapping::try_map(self, logical)
    }
}
