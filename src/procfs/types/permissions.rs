/*!
 * Node Permissions
 * Unix-style mode bits for proc nodes
 */

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::types::Uid;

/// Requested access bits
pub const MAY_READ: u32 = 0o4;
pub const MAY_WRITE: u32 = 0o2;

/// Node permissions (Unix-style) with validation
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(deserialize_with = "deserialize_permission_mode")]
    pub mode: u32,
}

impl Permissions {
    /// Create permissions (masks to rwx bits)
    #[inline]
    #[must_use]
    pub const fn new(mode: u32) -> Self {
        Self { mode: mode & 0o777 }
    }

    /// Read-write for everyone (0o666)
    #[inline]
    #[must_use]
    pub const fn world_writable() -> Self {
        Self { mode: 0o666 }
    }

    /// Get user permissions (rwx)
    #[inline]
    #[must_use]
    pub const fn user_permissions(&self) -> u32 {
        (self.mode >> 6) & 0o7
    }

    /// Get other permissions (rwx)
    #[inline]
    #[must_use]
    pub const fn other_permissions(&self) -> u32 {
        self.mode & 0o7
    }

    /// Check `want` (a mask of [`MAY_READ`] / [`MAY_WRITE`]) for `uid`
    ///
    /// uid 0 bypasses the bits. Groups are not modelled: non-owners get the
    /// "other" bits.
    #[inline]
    #[must_use]
    pub const fn allows(&self, uid: Uid, owner: Uid, want: u32) -> bool {
        if uid == 0 {
            return true;
        }
        let granted = if uid == owner {
            self.user_permissions()
        } else {
            self.other_permissions()
        };
        granted & want == want
    }
}

/// Deserialize and validate permission mode (must be <= 0o777)
fn deserialize_permission_mode<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let mode = u32::deserialize(deserializer)?;
    if mode > 0o777 {
        return Err(serde::de::Error::custom(format!(
            "invalid permission mode: 0o{:o} exceeds maximum 0o777",
            mode
        )));
    }
    Ok(mode)
}

impl Default for Permissions {
    fn default() -> Self {
        Self::world_writable()
    }
}
