// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_torus
//!
//! Toroidal (ring) addressing for scrollable surfaces that are backed by a fixed size,
//! contiguous buffer: a canvas, a tile cache, a circular log. The logical window pans
//! over an unbounded coordinate space in O(1) time and space, and data that is already
//! resident in the buffer is reused instead of being shifted or copied.
//!
//! # Table of contents
//!
//! - [The problem](#the-problem)
//! - [Components](#components)
//! - [Splitting at the wrap seam](#splitting-at-the-wrap-seam)
//! - [Sharing a mapping between threads](#sharing-a-mapping-between-threads)
//! - [Errors and preconditions](#errors-and-preconditions)
//!
//! # The problem
//!
//! A viewport of `w × h` cells scrolls over a much larger (or infinite) surface. The
//! cells it shows live in a buffer of exactly `w × h` slots. When the viewport pans by
//! one column, only one column of new data needs to be fetched; the rest is already in
//! the buffer. Instead of moving the resident data, the mapping moves the point where
//! physical addressing wraps around:
//!
//! ```text
//!  logical:   ... 5  6  7  8  9 10 11 12 ...
//!                   └───── window ─────┘
//!  physical:        6  7  0  1  2  3  4  5     (length 8, physical_start 6)
//!                         ↑
//!                     wrap seam
//! ```
//!
//! # Components
//!
//! | Type              | Role                                                        |
//! |-------------------|-------------------------------------------------------------|
//! | [`RingMapping`]   | 1-D state machine: `reset`, `shift`, `map`, `split`         |
//! | [`TorusMapping`]  | Two independent rings, one per axis, plus quadrant `split`  |
//! | [`SharedMapping`] | `RwLock` + version counter for one writer and many readers  |
//! | [`Interval`], [`Point`], [`Region`] | Closed-open value types used by the above |
//!
//! Both mappings are `Copy` value types that hold no reference to the backing store.
//!
//! # Splitting at the wrap seam
//!
//! A bulk operation (copy, blit, iterate) over a logical range must not cross the seam,
//! since the backing store is a single contiguous array. [`RingMapping::split`] cuts a
//! range into at most two pieces, [`TorusMapping::split`] cuts a region into at most
//! four. Empty pieces are normalized to the canonical empty value, so one equality check
//! skips them. [`TorusMapping::linear_pieces`] does the clipping, splitting and mapping
//! in one go:
//!
//! ```
//! use r3bl_torus::{TorusMapping, point, region};
//!
//! let mut torus = TorusMapping::<i64>::new(4, 4);
//! torus.reset(point(0, 0));
//! torus.shift(point(1, 1));
//!
//! for piece in torus.linear_pieces(region(0, 0, 3, 3)) {
//!     // Copy `piece.logical` from the source into `piece.physical` of the store,
//!     // row by row, each row a contiguous slice.
//!     assert_eq!(piece.logical.area(), piece.physical.area());
//! }
//! ```
//!
//! # Sharing a mapping between threads
//!
//! [`SharedMapping`] pairs the mapping with a version that is bumped under the write
//! lock. Readers take a [`MappingSnapshot`], work with their copy, and check
//! [`SharedMapping::is_current`] to detect a concurrent pan.
//!
//! # Errors and preconditions
//!
//! - Mapping a coordinate outside the current window is a programming error:
//!   [`RingMapping::map`] and [`TorusMapping::map`] panic. `try_map` returns a
//!   [`MappingError`] instead.
//! - Degenerate input to `split`, or input outside the mapped window, is not an error.
//!   It yields empty pieces.
//! - A window that no longer fits the coordinate type is reported by `try_reset` and
//!   `try_shift` as [`MappingError::WindowOverflow`]. `reset` and `shift` panic instead.
//! - Otherwise, shifting by any amount, including multiples of the length, is valid.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod common;
pub mod coordinates;
pub mod decl_macros;
pub mod log;
pub mod mapping;
pub mod pan_cli;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use common::*;
pub use coordinates::*;
pub use mapping::*;
pub use pan_cli::*;
