/*!
 * Proc PID Inspector Library
 * Pseudo-file that stores a target PID and reports its scheduling state
 */

pub mod core;
pub mod monitoring;
pub mod permissions;
pub mod pidfile;
pub mod process;
pub mod procfs;

// Re-exports
pub use crate::core::{
    AccessMode, Credentials, KernelError, ModuleConfig, PidFileError, PidFileResult, PidValue,
};
pub use monitoring::init_tracing;
pub use pidfile::{PidFile, PidModule, PidStore, ProcessReport, ProcessSnapshot};
pub use process::{LinuxProcTable, ProcessTable, TaskRecord, TaskTable};
pub use procfs::{OpenFlags, ProcError, ProcRegistry, SeqFile, UserSlice};
