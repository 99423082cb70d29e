// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Library side of the `torus_pan` binary: argument parsing and the pan script that
//! drives a [`TorusMapping`](crate::TorusMapping) from the command line.

// Attach sources.
pub mod cli_args;
pub mod pan_script;

// Re-export.
pub use cli_args::*;
pub use pan_script::*;
