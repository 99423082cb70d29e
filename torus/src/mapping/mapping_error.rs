// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Axis;

/// Errors from constructing or querying a [`RingMapping`] or [`TorusMapping`].
///
/// | Variant             | Cause                                                  |
/// | :------------------ | :----------------------------------------------------- |
/// | [`InvalidCapacity`] | A mapping was constructed with a capacity below 1      |
/// | [`OutOfInterval`]   | [`RingMapping::try_map`] outside the mapped interval   |
/// | [`OutOfRegion`]     | [`TorusMapping::try_map`] outside the mapped region    |
/// | [`WindowOverflow`]  | A reset or shift moves the window past `P::MIN`/`P::MAX` |
/// | [`LockPoisoned`]    | A writer panicked while holding a [`SharedMapping`]    |
///
/// Degenerate inputs to `split` are never errors, they produce canonical empty pieces.
///
/// [`InvalidCapacity`]: Self::InvalidCapacity
/// [`OutOfInterval`]: Self::OutOfInterval
/// [`OutOfRegion`]: Self::OutOfRegion
/// [`WindowOverflow`]: Self::WindowOverflow
/// [`LockPoisoned`]: Self::LockPoisoned
/// [`RingMapping`]: crate::RingMapping
/// [`RingMapping::try_map`]: crate::RingMapping::try_map
/// [`TorusMapping`]: crate::TorusMapping
/// [`TorusMapping::try_map`]: crate::TorusMapping::try_map
/// [`SharedMapping`]: crate::SharedMapping
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum MappingError {
    #[error("Mapping capacity must be at least 1, got {length}")]
    #[diagnostic(
        code(r3bl_torus::mapping::invalid_capacity),
        help("Size the mapping to match the physical backing store, which is never empty")
    )]
    InvalidCapacity { length: i128 },

    #[error("Logical coordinate {coordinate} is outside the mapped interval [{begin}, {end})")]
    #[diagnostic(
        code(r3bl_torus::mapping::out_of_interval),
        help("Shift the mapping so the interval covers the coordinate before mapping it")
    )]
    OutOfInterval {
        coordinate: i128,
        begin: i128,
        end: i128,
    },

    #[error(
        "Logical {axis} coordinate {coordinate} is outside the mapped region [{begin}, {end})"
    )]
    #[diagnostic(
        code(r3bl_torus::mapping::out_of_region),
        help("Shift the mapping so the region covers the point before mapping it")
    )]
    OutOfRegion {
        axis: Axis,
        coordinate: i128,
        begin: i128,
        end: i128,
    },

    #[error(
        "Window of length {length} starting at {start} + {offset} does not fit the \
         coordinate range"
    )]
    #[diagnostic(
        code(r3bl_torus::mapping::window_overflow),
        help("Use a wider precision, or reset the mapping closer to the origin")
    )]
    WindowOverflow {
        start: i128,
        offset: i128,
        length: i128,
    },

    #[error("Shared mapping lock poisoned")]
    #[diagnostic(
        code(r3bl_torus::mapping::lock_poisoned),
        help("A prior thread panicked while updating the mapping, its state is suspect")
    )]
    LockPoisoned,
}

impl MappingError {
    /// Attach the axis to an [`MappingError::OutOfInterval`] coming from one of the rings
    /// of a torus. Other variants pass through unchanged.
    #[must_use]
    pub fn on_axis(self, axis: Axis) -> Self {
        match self {
            Self::OutOfInterval {
                coordinate,
                begin,
                end,
            } => Self::OutOfRegion {
                axis,
                coordinate,
                begin,
                end,
            },
            other => other,
        }
    }
}
