// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Share one mapping between a single panning writer and many readers. See
//! [`SharedMapping`] for details.

use std::sync::{Arc, RwLock,
                atomic::{AtomicU64, Ordering}};

use super::{LogicalMapping, MappingError};

/// A copy of a mapping, tagged with the version it was taken at.
///
/// Readers compute physical addresses from `mapping` without holding any lock, then use
/// [`SharedMapping::is_current`] to learn whether a writer has panned since.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingSnapshot<M> {
    pub version: u64,
    pub mapping: M,
}

/// Cheap to clone handle to a [`RingMapping`] or [`TorusMapping`] that several threads
/// read while one of them pans it.
///
/// ```text
///   writer                         readers
///   ──────                         ───────
///   update(|m| m.shift(..))        snapshot() ─→ MappingSnapshot { version, mapping }
///     ├ write lock                   ├ read lock
///     ├ mutate mapping               ├ copy mapping + load version
///     ├ version += 1                 └ unlock
///     └ unlock                     ... work with the copy ...
///                                  is_current(&snapshot)? else retake
/// ```
///
/// The version is bumped while the write lock is still held, so a snapshot always pairs
/// a mapping with the version that produced it, and a reader never observes a
/// half-applied shift.
///
/// [`RingMapping`]: crate::RingMapping
/// [`TorusMapping`]: crate::TorusMapping
#[derive(Debug)]
pub struct SharedMapping<M: LogicalMapping> {
    inner: Arc<SharedMappingInner<M>>,
}

#[derive(Debug)]
struct SharedMappingInner<M> {
    mapping: RwLock<M>,
    version: AtomicU64,
}

impl<M: LogicalMapping> Clone for SharedMapping<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: LogicalMapping> SharedMapping<M> {
    #[must_use]
    pub fn new(mapping: M) -> Self {
        Self {
            inner: Arc::new(SharedMappingInner {
                mapping: RwLock::new(mapping),
                version: AtomicU64::new(0),
            }),
        }
    }

    /// Number of updates applied so far.
    #[must_use]
    pub fn version(&self) -> u64 { self.inner.version.load(Ordering::SeqCst) }

    /// Copy the current mapping along with its version.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::LockPoisoned`] if a writer panicked mid-update.
    pub fn snapshot(&self) -> Result<MappingSnapshot<M>, MappingError> {
        let guard = self
            .inner
            .mapping
            .read()
            .map_err(|_| MappingError::LockPoisoned)?;
        Ok(MappingSnapshot {
            version: self.inner.version.load(Ordering::SeqCst),
            mapping: *guard,
        })
    }

    /// `true` if no update has been applied since `snapshot` was taken.
    #[must_use]
    pub fn is_current(&self, snapshot: &MappingSnapshot<M>) -> bool {
        self.version() == snapshot.version
    }

    /// Apply `f` to the mapping under the write lock, bump the version, and return the
    /// new version along with whatever `f` returned.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::LockPoisoned`] if a writer panicked mid-update.
    pub fn update<R>(&self, f: impl FnOnce(&mut M) -> R) -> Result<(u64, R), MappingError> {
        let mut guard = self
            .inner
            .mapping
            .write()
            .map_err(|_| MappingError::LockPoisoned)?;
        let result = f(&mut *guard);
        let version = self.inner.version.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        Ok((version, result))
    }

    /// Apply a fallible transition under the write lock. The version is only bumped
    /// when `f` succeeds, and a failed transition leaves the mapping untouched.
    fn try_transition(
        &self,
        f: impl FnOnce(&mut M) -> Result<(), MappingError>,
    ) -> Result<u64, MappingError> {
        let mut guard = self
            .inner
            .mapping
            .write()
            .map_err(|_| MappingError::LockPoisoned)?;
        f(&mut *guard)?;
        Ok(self.inner.version.fetch_add(1, Ordering::SeqCst).wrapping_add(1))
    }

    /// Pan the shared mapping. Returns the new version.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::LockPoisoned`] if a writer panicked mid-update, or
    /// [`MappingError::WindowOverflow`] if the shifted window doesn't fit the coordinate
    /// type.
    pub fn shift(&self, offset: M::Coord) -> Result<u64, MappingError> {
        self.try_transition(|mapping| mapping.try_shift(offset))
    }

    /// Re-anchor the shared mapping. Returns the new version.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::LockPoisoned`] if a writer panicked mid-update, or
    /// [`MappingError::WindowOverflow`] if the window at `begin` doesn't fit the
    /// coordinate type.
    pub fn reset(&self, begin: M::Coord) -> Result<u64, MappingError> {
        self.try_transition(|mapping| mapping.try_reset(begin))
    }

    /// Map a logical coordinate through the current mapping.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::LockPoisoned`] if a writer panicked mid-update, or the
    /// mapping's own error if `logical` is outside the mapped window.
    pub fn try_map(&self, logical: M::Coord) -> Result<M::Coord, MappingError> {
        self.snapshot()?.mapping.try_map(logical)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::{RingMapping, TorusMapping, assert_eq2, point};

    #[test]
    fn test_update_bumps_version() {
        let shared = SharedMapping::new(RingMapping::<i64>::new(8));
        assert_eq2!(shared.version(), 0);

        let before = shared.snapshot().unwrap();
        assert!(shared.is_current(&before));

        assert_eq2!(shared.shift(3).unwrap(), 1);
        assert!(!shared.is_current(&before));

        let after = shared.snapshot().unwrap();
        assert_eq2!(after.version, 1);
        assert_eq2!(after.mapping.start(), 3);
        assert_eq2!(before.mapping.start(), 0);

        assert_eq2!(shared.reset(-4).unwrap(), 2);
        assert_eq2!(shared.try_map(-4), Ok(0));
    }

    #[test]
    fn test_update_returns_closure_result() {
        let shared = SharedMapping::new(TorusMapping::<i32>::new(4, 4));
        let (version, region) = shared
            .update(|torus| {
                torus.shift(point(1, 2));
                torus.get_region()
            })
            .unwrap();
        assert_eq2!(version, 1);
        assert_eq2!(region, crate::region(1, 2, 5, 6));
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let shared = SharedMapping::new(RingMapping::<i64>::new(4));
        let writer = shared.clone();
        let result = thread::spawn(move || {
            let _unused = writer.update(|_| panic!("writer died mid-update"));
        })
        .join();
        assert!(result.is_err());

        assert_eq2!(shared.snapshot(), Err(MappingError::LockPoisoned));
        assert_eq2!(shared.shift(1), Err(MappingError::LockPoisoned));
    }

    #[test]
    fn test_overflowing_shift_keeps_version_and_lock() {
        let shared = SharedMapping::new(RingMapping::<i8>::new(100));
        assert_eq2!(shared.reset(20).unwrap(), 1);

        assert_eq2!(
            shared.shift(10),
            Err(MappingError::WindowOverflow {
                start: 20,
                offset: 10,
                length: 100,
            })
        );
        assert_eq2!(shared.version(), 1);
        assert_eq2!(shared.snapshot().unwrap().mapping.start(), 20);

        // Still usable afterwards.
        assert_eq2!(shared.shift(-10).unwrap(), 2);
        assert_eq2!(shared.try_map(10), Ok(90));
        assert_eq2!(shared.try_map(20), Ok(0));
    }

    /// Readers running alongside a panning writer must always see a mapping whose
    /// invariants hold, and versions that never go backwards.
    #[test]
    fn test_readers_never_observe_partial_shift() {
        const SHIFT_COUNT: u64 = 500;
        const READER_COUNT: usize = 4;

        let shared = SharedMapping::new(TorusMapping::<i64>::new(7, 5));

        let readers: Vec<_> = (0..READER_COUNT)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let mut last_version = 0;
                    while last_version < SHIFT_COUNT {
                        let snapshot = shared.snapshot().unwrap();
                        assert!(snapshot.version >= last_version);
                        last_version = snapshot.version;

                        let torus = snapshot.mapping;
                        let expected = i64::try_from(snapshot.version).unwrap();
                        assert_eq!(torus.x_ring().start(), expected);
                        assert_eq!(torus.y_ring().start(), -expected);
                        let region = torus.get_region();
                        assert_eq!(
                            torus.map(region.min),
                            point(expected % 7, (-expected).rem_euclid(5))
                        );
                    }
                })
            })
            .collect();

        for _ in 0..SHIFT_COUNT {
            shared.shift(point(1, -1)).unwrap();
        }

        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq2!(shared.version(), SHIFT_COUNT);
    }
}
