// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The numeric domain shared by logical and physical coordinates. See [`Precision`].

use std::{fmt::{Debug, Display},
          hash::Hash,
          ops::{Add, AddAssign, Mul, Neg, Rem, Sub, SubAssign}};

/// Signed integer type used for logical coordinates, physical coordinates, offsets and
/// capacities.
///
/// Logical coordinates are unbounded in both directions (a viewport can pan left of the
/// origin), so only signed primitives implement this trait. Physical coordinates use the
/// same type and are always in `[0, length)`.
///
/// ```
/// use r3bl_torus::Precision;
///
/// assert_eq!((-3_i32).modulo(8), 5);
/// assert_eq!(11_i64.modulo(8), 3);
/// assert_eq!((-16_i16).modulo(8), 0);
/// ```
pub trait Precision:
    Copy
    + Ord
    + Hash
    + Default
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    const ZERO: Self;
    const ONE: Self;

    /// Remainder of `self / rhs` that is never negative when `rhs` is positive, no
    /// matter the sign of `self`. The plain `%` operator keeps the sign of the dividend,
    /// which would produce negative physical addresses when panning backwards.
    #[must_use]
    fn modulo(self, rhs: Self) -> Self;

    /// `self + rhs`, or [`None`] if the sum is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, clamped to the representable range.
    #[must_use]
    fn saturating_sub(self, rhs: Self) -> Self;

    /// `self * rhs`, clamped to the representable range.
    #[must_use]
    fn saturating_mul(self, rhs: Self) -> Self;

    /// Widen to [`i128`] for diagnostics. Every implementing type fits.
    fn as_i128(self) -> i128;
}

macro_rules! impl_precision {
    ($($t:ty),* $(,)?) => {
        $(
            impl Precision for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn modulo(self, rhs: Self) -> Self { self.rem_euclid(rhs) }

                fn checked_add(self, rhs: Self) -> Option<Self> { <$t>::checked_add(self, rhs) }

                fn saturating_sub(self, rhs: Self) -> Self { <$t>::saturating_sub(self, rhs) }

                fn saturating_mul(self, rhs: Self) -> Self { <$t>::saturating_mul(self, rhs) }

                #[allow(clippy::cast_lossless, trivial_numeric_casts)]
                fn as_i128(self) -> i128 { self as i128 }
            }
        )*
    };
}

impl_precision!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 8, 0)]
    #[test_case(7, 8, 7)]
    #[test_case(8, 8, 0)]
    #[test_case(11, 8, 3)]
    #[test_case(-1, 8, 7)]
    #[test_case(-8, 8, 0)]
    #[test_case(-9, 8, 7)]
    #[test_case(-17, 8, 7)]
    fn test_modulo_is_never_negative(value: i64, divisor: i64, expected: i64) {
        let it = value.modulo(divisor);
        assert_eq!(it, expected);
        assert!(it >= 0 && it < divisor);
    }

    #[test]
    fn test_modulo_matches_rem_for_non_negative_dividends() {
        for value in 0_i32..64 {
            assert_eq!(value.modulo(7), value % 7);
        }
    }

    #[test]
    fn test_overflow_aware_arithmetic() {
        assert_eq!(Precision::checked_add(100_i8, 27), Some(127));
        assert_eq!(Precision::checked_add(100_i8, 28), None);
        assert_eq!(Precision::saturating_sub(100_i8, -100), i8::MAX);
        assert_eq!(Precision::saturating_mul(200_i16, 200), i16::MAX);
        assert_eq!(Precision::saturating_mul(-200_i16, 200), i16::MIN);
    }

    #[test]
    fn test_as_i128_widens_without_loss() {
        assert_eq!(i8::MIN.as_i128(), -128);
        assert_eq!(i64::MAX.as_i128(), i128::from(i64::MAX));
        assert_eq!((-5_isize).as_i128(), -5);
    }
}
