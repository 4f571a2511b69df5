/*!
 * System Limits and Constants
 *
 * Host-compatible values used by the pid inspector.
 * Linux-compatible values are marked with [LINUX-COMPAT]
 */

// =============================================================================
// TASK LIMITS
// =============================================================================

/// Size of the host's task command buffer including the NUL byte
/// [LINUX-COMPAT] TASK_COMM_LEN
pub const TASK_COMM_LEN: usize = 16;

/// Longest command name a snapshot carries
pub const MAX_COMM_BYTES: usize = TASK_COMM_LEN - 1;

/// Root of the host's process filesystem
pub const DEFAULT_PROC_ROOT: &str = "/proc";

// =============================================================================
// PSEUDO-FILE DEFAULTS
// =============================================================================

/// Node name registered under the proc registry
pub const DEFAULT_NODE_NAME: &str = "pid";

/// Mode bits of the registered node (rw for everyone)
/// [LINUX-COMPAT] matches `proc_create(..., 0666, ...)`
pub const DEFAULT_NODE_MODE: u32 = 0o666;

// =============================================================================
// ERRNO VALUES
// =============================================================================

/// [LINUX-COMPAT] errno values surfaced to callers
pub mod errno {
    pub const ENOENT: i32 = 2;
    pub const EBADF: i32 = 9;
    pub const ENOMEM: i32 = 12;
    pub const EACCES: i32 = 13;
    pub const EFAULT: i32 = 14;
    pub const EEXIST: i32 = 17;
    pub const EINVAL: i32 = 22;
}

// =============================================================================
// RUN-STATE CODES
// =============================================================================

/// [LINUX-COMPAT] scheduler state bits as stored in `task_struct::__state`
///
/// Only host adapters use these; the inspector itself prints codes verbatim.
pub mod task_state {
    use crate::core::types::StateCode;

    pub const TASK_RUNNING: StateCode = 0x0000;
    pub const TASK_INTERRUPTIBLE: StateCode = 0x0001;
    pub const TASK_UNINTERRUPTIBLE: StateCode = 0x0002;
    pub const __TASK_STOPPED: StateCode = 0x0004;
    pub const TASK_TRACED: StateCode = 0x0008;
    pub const TASK_PARKED: StateCode = 0x0040;
    /// Zombies and dead tasks; the exit flavour lives in `exit_state`
    pub const TASK_DEAD: StateCode = 0x0080;
    pub const TASK_WAKEKILL: StateCode = 0x0100;
    pub const TASK_NOLOAD: StateCode = 0x0400;
    pub const TASK_STOPPED: StateCode = TASK_WAKEKILL | __TASK_STOPPED;
    pub const TASK_IDLE: StateCode = TASK_UNINTERRUPTIBLE | TASK_NOLOAD;
}
