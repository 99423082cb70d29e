// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plain value types consumed by the ring and torus mappings.
//!
//! | Type          | Dimensions | Meaning                                      |
//! |---------------|------------|----------------------------------------------|
//! | [`Precision`] | scalar     | Numeric domain of logical & physical coords  |
//! | [`Interval`]  | 1-D        | Closed-open range `[begin, end)`             |
//! | [`Point`]     | 2-D        | `(x, y)` position or offset                  |
//! | [`Region`]    | 2-D        | Closed-open axis-aligned box `[min, max)`    |
//!
//! # Interval notation
//!
//! Every range in this module excludes its upper bound. A range whose upper bound is
//! less than or equal to its lower bound is empty. The canonical empty value has all
//! coordinates set to zero, so callers can skip empty pieces with a single equality
//! check against [`Interval::empty()`] or [`Region::empty()`].

// Attach sources.
pub mod axis;
pub mod interval;
pub mod parse_geometry;
pub mod point;
pub mod precision;
pub mod region;

// Re-export.
pub use axis::*;
pub use interval::*;
pub use parse_geometry::*;
pub use point::*;
pub use precision::*;
pub use region::*;
