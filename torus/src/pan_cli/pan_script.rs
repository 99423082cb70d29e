// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use smallvec::SmallVec;

use super::CLIArg;
use crate::{CommonResult, LinearPiece, MappingError, Point, Region, TorusMapping};

/// What happened to the torus before a [`PanStep`] was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanAction {
    Reset(Point<i64>),
    Shift(Point<i64>),
}

/// One requested region and the linear pieces it splits into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSplit {
    pub requested: Region<i64>,
    pub pieces: SmallVec<[LinearPiece<Region<i64>>; 4]>,
}

/// State of the torus after one [`PanAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanStep {
    pub action: PanAction,
    pub mapped_region: Region<i64>,
    pub physical_origin: Point<i64>,
    pub splits: Vec<RegionSplit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanReport {
    pub size: Point<i64>,
    pub steps: Vec<PanStep>,
}

/// Reset a torus to `cli_arg.origin`, apply each shift, and record every step.
///
/// # Errors
///
/// Returns an error if the width or height is less than 1, or if a reset or shift
/// moves the torus past the `i64` coordinate range.
pub fn run_pan_script(cli_arg: &CLIArg) -> CommonResult<PanReport> {
    let mut torus = TorusMapping::try_new(cli_arg.width, cli_arg.height)?;

    let actions = std::iter::once(PanAction::Reset(cli_arg.origin))
        .chain(cli_arg.shifts.iter().copied().map(PanAction::Shift));

    let steps = actions
        .map(|action| -> Result<PanStep, MappingError> {
            match action {
                PanAction::Reset(begin) => torus.try_reset(begin)?,
                PanAction::Shift(offset) => torus.try_shift(offset)?,
            }
            Ok(record_step(&torus, action, &cli_arg.regions))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PanReport {
        size: torus.size(),
        steps,
    })
}

fn record_step(
    torus: &TorusMapping<i64>,
    action: PanAction,
    regions: &[Region<i64>],
) -> PanStep {
    let mapped_region = torus.get_region();
    let splits = regions
        .iter()
        .map(|&requested| {
            let pieces = torus.linear_pieces(requested);
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Split region",
                requested = %requested,
                piece_count = pieces.len()
            );
            RegionSplit { requested, pieces }
        })
        .collect();

    PanStep {
        action,
        mapped_region,
        physical_origin: torus.map(mapped_region.min),
        splits,
    }
}

impl Display for PanAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PanAction::Reset(begin) => write!(f, "reset to {begin}"),
            PanAction::Shift(offset) => write!(f, "shift by {offset}"),
        }
    }
}

impl Display for PanReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "torus {}x{}", self.size.x, self.size.y)?;
        for step in &self.steps {
            writeln!(
                f,
                "{}: logical {}, physical origin {}",
                step.action, step.mapped_region, step.physical_origin
            )?;
            for split in &step.splits {
                if split.pieces.is_empty() {
                    writeln!(f, "  {}: outside mapped region", split.requested)?;
                    continue;
                }
                writeln!(f, "  {}:", split.requested)?;
                for piece in &split.pieces {
                    writeln!(f, "    {piece}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::{assert_eq2, point, region};

    fn parse(args: &[&str]) -> CLIArg {
        CLIArg::try_parse_from(std::iter::once("torus_pan").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_reset_then_shift() {
        let cli_arg = parse(&[
            "--width", "4", "--height", "4", "--shift", "1,1", "--region", "0,0,3,3",
        ]);
        let report = run_pan_script(&cli_arg).unwrap();
        assert_eq2!(report.size, point(4, 4));
        assert_eq2!(report.steps.len(), 2);

        let reset = &report.steps[0];
        assert_eq2!(reset.action, PanAction::Reset(point(0, 0)));
        assert_eq2!(reset.mapped_region, region(0, 0, 4, 4));
        assert_eq2!(reset.physical_origin, point(0, 0));
        assert_eq2!(
            reset.splits[0].pieces.as_slice(),
            &[LinearPiece {
                logical: region(0, 0, 3, 3),
                physical: region(0, 0, 3, 3),
            }]
        );

        let shift = &report.steps[1];
        assert_eq2!(shift.action, PanAction::Shift(point(1, 1)));
        assert_eq2!(shift.mapped_region, region(1, 1, 5, 5));
        assert_eq2!(shift.physical_origin, point(1, 1));
        // Clipped to [1, 3) x [1, 3), which lies before both seams.
        assert_eq2!(
            shift.splits[0].pieces.as_slice(),
            &[LinearPiece {
                logical: region(1, 1, 3, 3),
                physical: region(1, 1, 3, 3),
            }]
        );
    }

    #[test]
    fn test_invalid_capacity_is_reported() {
        let cli_arg = parse(&["--width", "0"]);
        let report = run_pan_script(&cli_arg).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<MappingError>(),
            Some(&MappingError::InvalidCapacity { length: 0 })
        );
    }

    #[test]
    fn test_window_overflow_is_reported() {
        let cli_arg = parse(&["--origin", "0,0", "--shift", "9223372036854775800,0"]);
        let report = run_pan_script(&cli_arg).unwrap_err();
        assert!(matches!(
            report.downcast_ref::<MappingError>(),
            Some(MappingError::WindowOverflow { .. })
        ));
    }

    #[test]
    fn test_display() {
        let cli_arg = parse(&[
            "--width", "4", "--height", "2", "--shift", "3,0", "--region", "3,0,6,1",
            "--region", "9,9,10,10",
        ]);
        let output = run_pan_script(&cli_arg).unwrap().to_string();
        let expected = "\
torus 4x2
reset to (0, 0): logical [0, 4) x [0, 2), physical origin (0, 0)
  [3, 6) x [0, 1):
    [3, 4) x [0, 1) -> [3, 4) x [0, 1)
  [9, 10) x [9, 10): outside mapped region
shift by (3, 0): logical [3, 7) x [0, 2), physical origin (3, 0)
  [3, 6) x [0, 1):
    [3, 4) x [0, 1) -> [3, 4) x [0, 1)
    [4, 6) x [0, 1) -> [0, 2) x [0, 1)
  [9, 10) x [9, 10): outside mapped region
";
        assert_eq2!(output, expected);
    }
}
