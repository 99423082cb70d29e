// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::{Add, AddAssign, Neg, Sub, SubAssign}};

use super::Precision;

/// A 2-D position (logical or physical) or a 2-D offset used to pan a
/// [`TorusMapping`]. You can use [`point()`] to create a new instance.
///
/// [`TorusMapping`]: crate::TorusMapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point<P: Precision> {
    pub x: P,
    pub y: P,
}

pub fn point<P: Precision>(x: P, y: P) -> Point<P> { Point { x, y } }

impl<P: Precision> Point<P> {
    #[must_use]
    pub fn origin() -> Self { point(P::ZERO, P::ZERO) }
}

impl<P: Precision> From<(P, P)> for Point<P> {
    fn from((x, y): (P, P)) -> Self { point(x, y) }
}

impl<P: Precision> Add for Point<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output { point(self.x + rhs.x, self.y + rhs.y) }
}

impl<P: Precision> AddAssign for Point<P> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<P: Precision> Sub for Point<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output { point(self.x - rhs.x, self.y - rhs.y) }
}

impl<P: Precision> SubAssign for Point<P> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<P: Precision> Neg for Point<P> {
    type Output = Self;

    fn neg(self) -> Self::Output { point(-self.x, -self.y) }
}

impl<P: Precision> Display for Point<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
