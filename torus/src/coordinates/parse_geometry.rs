// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parse [`Point`] and [`Region`] from comma separated text, eg: `"3,-4"` and
//! `"0,0,3,3"`. Whitespace around each component is ignored.

use std::str::FromStr;

use super::{Point, Precision, Region, point, region};

/// Errors from parsing a [`Point`] or a [`Region`] out of text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ParseGeometryError {
    #[error("Expected {expected} comma separated numbers, got {actual} in {input:?}")]
    #[diagnostic(
        code(r3bl_torus::parse::component_count),
        help("A point is written as `x,y` and a region as `min_x,min_y,max_x,max_y`")
    )]
    ComponentCount {
        input: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid number {component:?} in {input:?}")]
    #[diagnostic(code(r3bl_torus::parse::invalid_number))]
    InvalidNumber { input: String, component: String },
}

fn parse_components<P, const N: usize>(input: &str) -> Result<[P; N], ParseGeometryError>
where
    P: Precision + FromStr,
{
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(ParseGeometryError::ComponentCount {
            input: input.to_string(),
            expected: N,
            actual: parts.len(),
        });
    }

    let mut acc = [P::ZERO; N];
    for (slot, part) in acc.iter_mut().zip(parts) {
        *slot = part
            .parse::<P>()
            .map_err(|_| ParseGeometryError::InvalidNumber {
                input: input.to_string(),
                component: part.to_string(),
            })?;
    }
    Ok(acc)
}

impl<P: Precision + FromStr> FromStr for Point<P> {
    type Err = ParseGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_components::<P, 2>(s)?;
        Ok(point(x, y))
    }
}

impl<P: Precision + FromStr> FromStr for Region<P> {
    type Err = ParseGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [min_x, min_y, max_x, max_y] = parse_components::<P, 4>(s)?;
        Ok(region(min_x, min_y, max_x, max_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_parse_point() {
        assert_eq2!("3,-4".parse::<Point<i64>>(), Ok(point(3, -4)));
        assert_eq2!(" 7 , 0 ".parse::<Point<i32>>(), Ok(point(7, 0)));
    }

    #[test]
    fn test_parse_region() {
        assert_eq2!("0,0,3,3".parse::<Region<i64>>(), Ok(region(0, 0, 3, 3)));
    }

    #[test]
    fn test_parse_wrong_component_count() {
        assert_eq2!(
            "1,2,3".parse::<Point<i64>>(),
            Err(ParseGeometryError::ComponentCount {
                input: "1,2,3".to_string(),
                expected: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_parse_invalid_number() {
        assert_eq2!(
            "1,x".parse::<Point<i8>>(),
            Err(ParseGeometryError::InvalidNumber {
                input: "1,x".to_string(),
                component: "x".to_string(),
            })
        );
        // Out of range for the precision.
        assert!("1,300".parse::<Point<i8>>().is_err());
    }
}
