// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`] in
/// application code, eg: the `torus_pan` binary. Library functions return their own
/// typed errors ([`MappingError`], [`ParseGeometryError`]) which convert into a
/// [`miette::Report`] with `?`.
///
/// [`MappingError`]: crate::MappingError
/// [`ParseGeometryError`]: crate::ParseGeometryError
pub type CommonResult<T> = miette::Result<T>;
