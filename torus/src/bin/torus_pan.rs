// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_torus::{CLIArg, CommonResult,
                 log::{DisplayPreference, TracingConfig, try_initialize_logging_global},
                 ok, run_pan_script};

fn main() -> CommonResult<()> {
    // If the args are malformed, the following line will print help and exit.
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    if should_log {
        let tracing_config = TracingConfig::new_display(DisplayPreference::Stderr)
            .with_level_filter(cli_arg.global_options.log_level.into());
        try_initialize_logging_global(tracing_config)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let report = run_pan_script(&cli_arg)?;
    println!("{report}");

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    ok!()
}
