/*!
 * Open Flags
 * Access mode requested when opening a proc node
 */

use serde::{Deserialize, Serialize};

use super::errors::ProcError;
use super::permissions::{MAY_READ, MAY_WRITE};

/// File open flags
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
pub struct OpenFlags {
    pub read: bool,
    pub write: bool,
}

impl OpenFlags {
    /// Create read-only flags
    #[inline]
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            read: true,
            ..Default::default()
        }
    }

    /// Create write-only flags
    #[inline]
    #[must_use]
    pub fn write_only() -> Self {
        Self {
            write: true,
            ..Default::default()
        }
    }

    /// Create read-write flags
    #[inline]
    #[must_use]
    pub fn read_write() -> Self {
        Self {
            read: true,
            write: true,
        }
    }

    /// Access bits this open needs from the node's mode
    #[inline]
    #[must_use]
    pub const fn access_mask(&self) -> u32 {
        let mut mask = 0;
        if self.read {
            mask |= MAY_READ;
        }
        if self.write {
            mask |= MAY_WRITE;
        }
        mask
    }

    /// Validate flag combinations
    #[must_use = "validation result must be checked"]
    pub fn validate(&self) -> Result<(), ProcError> {
        if !self.read && !self.write {
            return Err(ProcError::InvalidArgument(
                "open needs read or write access".into(),
            ));
        }
        Ok(())
    }
}
