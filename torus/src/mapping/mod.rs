// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Address mappings from an unbounded, panning logical space onto a fixed size physical
//! backing store.
//!
//! ```text
//! ┌──────────────────┐      ┌───────────────────┐      ┌────────────────────┐
//! │   RingMapping    │ ×2 → │   TorusMapping    │  →   │   SharedMapping    │
//! │ 1-D, [0, length) │      │ 2-D, [0,w)×[0,h)  │      │ RwLock + version   │
//! └──────────────────┘      └───────────────────┘      └────────────────────┘
//! ```
//!
//! Panning never moves stored data, it only moves the seam where physical addressing
//! wraps back to zero. Bulk operations that touch the backing store linearly must first
//! [`split`] their logical range at that seam into pieces that each map onto one
//! contiguous physical range.
//!
//! [`split`]: TorusMapping::split

// Attach sources.
pub mod linear_piece;
pub mod logical_mapping;
pub mod mapping_error;
pub mod ring_mapping;
pub mod shared_mapping;
pub mod torus_mapping;

// Re-export.
pub use linear_piece::*;
pub use logical_mapping::*;
pub use mapping_error::*;
pub use ring_mapping::*;
pub use shared_mapping::*;
pub use torus_mapping::*;

/// Emit `trace!` events from [`RingMapping`] and [`TorusMapping`] state transitions.
pub const DEBUG_TORUS_MAPPING: bool = true;
