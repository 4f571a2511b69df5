/*!
 * Process Types
 * Records returned by host process tables
 */

use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;

use crate::core::limits::MAX_COMM_BYTES;
use crate::core::types::{HostPid, StateCode};

/// Kind of task a pid handle is asked for
///
/// Mirrors the host's `PIDTYPE_*` selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PidKind {
    /// The task whose own id is the handle
    Pid,
    /// Thread group leader
    Tgid,
    /// Process group leader
    Pgid,
    /// Session leader
    Sid,
}

/// Resolved pid handle
///
/// Holding a handle does not keep the task alive; `task_of` may still
/// come back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PidHandle {
    nr: HostPid,
}

impl PidHandle {
    #[inline]
    pub const fn new(nr: HostPid) -> Self {
        Self { nr }
    }

    /// Numeric id the handle was resolved for
    #[inline]
    pub const fn nr(&self) -> HostPid {
        self.nr
    }
}

/// Task command name, at most [`MAX_COMM_BYTES`] bytes
///
/// Longer names are cut at a character boundary, matching the host's
/// fixed-size command buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommName(SmartString);

impl CommName {
    pub fn new(name: &str) -> Self {
        let mut end = name.len().min(MAX_COMM_BYTES);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        Self(SmartString::from(&name[..end]))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for CommName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for CommName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task record as reported by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TaskRecord {
    pub name: CommName,
    pub pid: HostPid,
    pub state: StateCode,
}

impl TaskRecord {
    pub fn new(name: impl Into<CommName>, pid: HostPid, state: StateCode) -> Self {
        Self {
            name: name.into(),
            pid,
            state,
        }
    }
}
