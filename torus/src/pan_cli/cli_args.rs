// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::{Args, Parser, ValueEnum};
use tracing_core::LevelFilter;

use crate::{Point, Region};

/// Pan a torus mapping and show how regions split into linear pieces.
///
/// The torus is reset to `--origin`, then each `--shift` is applied in order. After the
/// reset and after every shift, each `--region` is split at the wrap seams and printed
/// as `logical -> physical` rectangles.
#[derive(Debug, Parser)]
#[command(bin_name = "torus_pan")]
#[command(about = "Pan a torus mapping and split regions at its wrap seams", long_about = None)]
#[command(version)]
#[command(next_line_help = true)]
pub struct CLIArg {
    /// Width of the physical grid.
    #[arg(long, default_value_t = 8)]
    pub width: i64,

    /// Height of the physical grid.
    #[arg(long, default_value_t = 8)]
    pub height: i64,

    /// Logical point aligned to physical (0, 0) by the initial reset.
    #[arg(long, value_name = "X,Y", default_value = "0,0", allow_hyphen_values = true)]
    pub origin: Point<i64>,

    /// Pan offset, repeat to pan several times.
    #[arg(long = "shift", value_name = "DX,DY", allow_hyphen_values = true)]
    pub shifts: Vec<Point<i64>>,

    /// Logical region to split after every step, repeat for several regions.
    #[arg(
        long = "region",
        value_name = "MIN_X,MIN_Y,MAX_X,MAX_Y",
        allow_hyphen_values = true
    )]
    pub regions: Vec<Region<i64>>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to stderr"
    )]
    pub enable_logging: bool,

    #[arg(global = true, long, value_enum, default_value_t = LogLevel::Debug)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, point, region};

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["torus_pan"]).unwrap();
        assert_eq2!(cli_arg.width, 8);
        assert_eq2!(cli_arg.height, 8);
        assert_eq2!(cli_arg.origin, point(0, 0));
        assert!(cli_arg.shifts.is_empty());
        assert!(cli_arg.regions.is_empty());
        assert!(!cli_arg.global_options.enable_logging);
        assert_eq2!(cli_arg.global_options.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_repeated_and_negative_values() {
        let cli_arg = CLIArg::try_parse_from([
            "torus_pan",
            "--width",
            "4",
            "--origin",
            "-2,-3",
            "--shift",
            "1,1",
            "--shift",
            "-5,0",
            "--region",
            "0,0,3,3",
            "-l",
            "--log-level",
            "trace",
        ])
        .unwrap();
        assert_eq2!(cli_arg.width, 4);
        assert_eq2!(cli_arg.origin, point(-2, -3));
        assert_eq2!(cli_arg.shifts, vec![point(1, 1), point(-5, 0)]);
        assert_eq2!(cli_arg.regions, vec![region(0, 0, 3, 3)]);
        assert!(cli_arg.global_options.enable_logging);
        assert_eq2!(
            LevelFilter::from(cli_arg.global_options.log_level),
            LevelFilter::TRACE
        );
    }

    #[test]
    fn test_malformed_point_is_rejected() {
        assert!(CLIArg::try_parse_from(["torus_pan", "--shift", "1"]).is_err());
    }
}
