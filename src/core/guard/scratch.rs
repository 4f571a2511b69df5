/*!
 * Scratch Buffer Guard
 *
 * Owned kernel-side copy of caller bytes, freed on every exit path
 */

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::trace;

use super::traits::Guard;
use super::{GuardError, GuardMetadata, GuardResult};
use crate::procfs::uaccess::{copy_from_user, UserFault, UserSlice};

/// Counts scratch buffers handed out and still alive
///
/// Cloning shares the counters.
#[derive(Debug, Clone, Default)]
pub struct ScratchTracker {
    inner: Arc<TrackerInner>,
}

#[derive(Debug, Default)]
struct TrackerInner {
    outstanding: AtomicUsize,
    acquired: AtomicU64,
}

impl ScratchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers currently alive
    #[inline]
    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::Acquire)
    }

    /// Buffers acquired since creation
    #[inline]
    pub fn acquired(&self) -> u64 {
        self.inner.acquired.load(Ordering::Relaxed)
    }

    fn on_acquire(&self) {
        self.inner.outstanding.fetch_add(1, Ordering::AcqRel);
        self.inner.acquired.fetch_add(1, Ordering::Relaxed);
    }

    fn on_release(&self) {
        self.inner.outstanding.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Scoped scratch buffer of `len + 1` bytes
///
/// The extra byte holds the NUL terminator appended after the copy.
///
/// # Example
///
/// ```ignore
/// let mut scratch = ScratchBuffer::acquire(user.len(), &tracker)?;
/// scratch.fill_from(&user)?;
/// parse(scratch.token())
/// // Automatically freed on drop
/// ```
pub struct ScratchBuffer {
    data: Vec<u8>,
    len: usize,
    tracker: ScratchTracker,
    metadata: GuardMetadata,
    active: bool,
}

impl ScratchBuffer {
    /// Allocate room for `len` caller bytes plus a terminator
    ///
    /// Allocation is fallible; exhaustion is reported rather than aborting.
    pub fn acquire(len: usize, tracker: &ScratchTracker) -> GuardResult<Self> {
        let size = len
            .checked_add(1)
            .ok_or(GuardError::AllocationFailed(len))?;

        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| GuardError::AllocationFailed(size))?;

        tracker.on_acquire();
        trace!(size, "scratch buffer acquired");

        Ok(Self {
            data,
            len,
            tracker: tracker.clone(),
            metadata: GuardMetadata::new("scratch").with_size(size),
            active: true,
        })
    }

    /// Copy the caller's bytes in and append the terminator
    pub fn fill_from(&mut self, user: &UserSlice<'_>) -> Result<(), UserFault> {
        self.data.clear();
        copy_from_user(&mut self.data, user, self.len)?;
        self.data.push(0);
        Ok(())
    }

    /// Bytes up to (not including) the first NUL
    pub fn token(&self) -> &[u8] {
        let end = self
            .data
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.data.len());
        &self.data[..end]
    }

    /// Capacity requested from the allocator
    #[inline]
    pub fn size(&self) -> usize {
        self.metadata.size_bytes
    }
}

impl Guard for ScratchBuffer {
    fn resource_type(&self) -> &'static str {
        "scratch"
    }

    fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn release(&mut self) -> GuardResult<()> {
        if !self.active {
            return Err(GuardError::AlreadyReleased);
        }
        self.active = false;
        self.data = Vec::new();
        self.tracker.on_release();
        trace!(
            size = self.metadata.size_bytes,
            lifetime_us = self.metadata.lifetime_micros(),
            "scratch buffer released"
        );
        Ok(())
    }
}

impl Drop for ScratchBuffer {
    fn drop(&mut self) {
        if self.active {
            let _ = self.release();
        }
    }
}
