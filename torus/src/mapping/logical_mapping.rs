// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use super::MappingError;

/// The state transitions shared by [`RingMapping`] (1-D) and [`TorusMapping`] (2-D).
/// [`SharedMapping`] is generic over this trait, so the same version-counted wrapper
/// serves both.
///
/// Implementors are small `Copy` value types that own no resources. Each transition is a
/// handful of integer assignments, which is what lets [`SharedMapping`] hand out whole
/// copies as snapshots.
///
/// [`RingMapping`]: crate::RingMapping
/// [`TorusMapping`]: crate::TorusMapping
/// [`SharedMapping`]: crate::SharedMapping
pub trait LogicalMapping: Copy + Debug {
    /// A scalar for a ring, a [`Point`](crate::Point) for a torus.
    type Coord: Copy + Debug;

    /// Re-anchor the mapping so that logical `begin` lands on physical zero.
    fn reset(&mut self, begin: Self::Coord);

    /// Pan the logical window by `offset` without touching stored data.
    fn shift(&mut self, offset: Self::Coord);

    /// Like [`LogicalMapping::reset`], but reports a window that doesn't fit the
    /// coordinate type instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::WindowOverflow`] and leaves the mapping untouched.
    fn try_reset(&mut self, begin: Self::Coord) -> Result<(), MappingError>;

    /// Like [`LogicalMapping::shift`], but reports a window that doesn't fit the
    /// coordinate type instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::WindowOverflow`] and leaves the mapping untouched.
    fn try_shift(&mut self, offset: Self::Coord) -> Result<(), MappingError>;

    /// Map a logical coordinate to its physical coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if `logical` is outside the currently mapped logical window.
    fn try_map(&self, logical: Self::Coord) -> Result<Self::Coord, MappingError>;
}
