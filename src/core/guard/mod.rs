/*!
 * RAII Resource Guards
 *
 * Scoped per-call resources with automatic cleanup.
 *
 * ## Guard Types
 *
 * - **ScratchBuffer**: Kernel-side copy of caller bytes for one write call
 *
 * ## Example
 *
 * ```ignore
 * let mut scratch = ScratchBuffer::acquire(len, &tracker)?;
 * scratch.fill_from(&user)?;
 * let text = scratch.token();
 * // Freed on drop, including early returns
 * ```
 */

mod scratch;
mod traits;

pub use scratch::{ScratchBuffer, ScratchTracker};
pub use traits::Guard;

/// Result type for guard operations
pub type GuardResult<T> = Result<T, GuardError>;

/// Errors that can occur during guard operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    #[error("Resource already released")]
    AlreadyReleased,

    #[error("Allocation of {0} bytes failed")]
    AllocationFailed(usize),
}

/// Guard metadata for observability
#[derive(Debug, Clone)]
pub struct GuardMetadata {
    pub resource_type: &'static str,
    pub creation_time: std::time::Instant,
    pub size_bytes: usize,
}

impl GuardMetadata {
    #[inline]
    pub fn new(resource_type: &'static str) -> Self {
        Self {
            resource_type,
            creation_time: std::time::Instant::now(),
            size_bytes: 0,
        }
    }

    #[inline]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size_bytes = size;
        self
    }

    #[inline]
    pub fn lifetime_micros(&self) -> u64 {
        self.creation_time.elapsed().as_micros() as u64
    }
}
