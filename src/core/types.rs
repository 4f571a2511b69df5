/*!
 * Core Types
 * Common types used across the pid inspector
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process identifier as assigned by the host (`pid_t`)
pub type HostPid = i32;

/// Opaque run-state code owned by the host scheduler
pub type StateCode = u32;

/// User ID of a caller
pub type Uid = u32;

/// Identifier written through the pseudo-file
///
/// Parsed as a signed 64-bit value and stored only when non-negative, so the
/// accepted range is `0..=i64::MAX`.
pub type QueryPid = u64;

/// Contents of the PID store
///
/// `Unset` is its own variant; there is no numeric sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "pid")]
pub enum PidValue {
    #[default]
    Unset,
    Set(QueryPid),
}

impl PidValue {
    /// Stored identifier, if any
    #[inline]
    #[must_use]
    pub const fn get(self) -> Option<QueryPid> {
        match self {
            PidValue::Unset => None,
            PidValue::Set(pid) => Some(pid),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, PidValue::Set(_))
    }
}

impl fmt::Display for PidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PidValue::Unset => f.write_str("unset"),
            PidValue::Set(pid) => write!(f, "{}", pid),
        }
    }
}

/// Identity of the caller performing a file operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Credentials {
    pub uid: Uid,
    pub pid: HostPid,
}

impl Credentials {
    pub const fn new(uid: Uid, pid: HostPid) -> Self {
        Self { uid, pid }
    }

    /// Superuser credentials (uid 0)
    pub const fn root(pid: HostPid) -> Self {
        Self { uid: 0, pid }
    }

    #[inline]
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.uid == 0
    }

    /// Credentials of the current host process
    #[cfg(unix)]
    pub fn current() -> Self {
        Self {
            uid: nix::unistd::geteuid().as_raw(),
            pid: nix::unistd::getpid().as_raw(),
        }
    }

    /// Credentials of the current host process
    #[cfg(not(unix))]
    pub fn current() -> Self {
        Self {
            uid: 0,
            pid: std::process::id() as HostPid,
        }
    }
}
