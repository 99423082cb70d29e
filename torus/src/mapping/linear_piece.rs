// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

/// A non-empty piece of a split logical range, paired with the contiguous physical
/// range it maps onto. `S` is [`Interval`] for a ring and [`Region`] for a torus.
///
/// Both sides always have the same extent, so a caller can copy `logical` data from a
/// source into `physical` slots of the backing store with one linear copy per row.
///
/// [`Interval`]: crate::Interval
/// [`Region`]: crate::Region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinearPiece<S> {
    pub logical: S,
    pub physical: S,
}

impl<S: Display> Display for LinearPiece<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.logical, self.physical)
    }
}
