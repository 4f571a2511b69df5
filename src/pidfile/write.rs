/*!
 * Write Handler
 * Copy-in, parse and store of the target identifier
 */

use tracing::{debug, info};

use super::parse::parse_pid;
use super::store::PidStore;
use crate::core::errors::{PidFileError, PidFileResult};
use crate::core::guard::{ScratchBuffer, ScratchTracker};
use crate::procfs::uaccess::UserSlice;

/// Accepts caller text and replaces the stored identifier
///
/// The file offset is ignored: every write is a full replace. On any error
/// the store keeps its previous value.
#[derive(Debug, Clone)]
pub struct WriteHandler {
    store: PidStore,
    scratch: ScratchTracker,
}

impl WriteHandler {
    pub fn new(store: PidStore, scratch: ScratchTracker) -> Self {
        Self { store, scratch }
    }

    /// Handle one write call
    ///
    /// Returns the caller-declared length on success.
    pub fn write(&self, user: &UserSlice<'_>) -> PidFileResult<usize> {
        let len = user.len();

        let mut scratch = ScratchBuffer::acquire(len, &self.scratch).map_err(|e| {
            debug!(len, error = %e, "pid write rejected: allocation failed");
            PidFileError::OutOfMemory(len.saturating_add(1))
        })?;

        scratch.fill_from(user).map_err(|fault| {
            debug!(len, error = %fault, "pid write rejected: bad address");
            PidFileError::BadAddress { declared: len }
        })?;

        let pid = parse_pid(scratch.token()).map_err(|e| {
            debug!(len, error = %e, "pid write rejected: invalid argument");
            PidFileError::InvalidArgument(e.to_string())
        })?;

        self.store.set(pid);
        info!(pid, "PID set to {}", pid);
        Ok(len)
    }

    /// Store the handler writes into
    pub fn store(&self) -> &PidStore {
        &self.store
    }
}
