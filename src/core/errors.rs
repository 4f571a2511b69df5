/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::limits::errno;

// Re-export subsystem errors
pub use crate::permissions::types::PermissionError;
pub use crate::procfs::types::ProcError;

/// Pid file operation result
///
/// # Must Use
/// A failed write leaves the stored PID untouched and must be reported
pub type PidFileResult<T> = Result<T, PidFileError>;

/// Errors returned by the pid file handlers
///
/// Every variant is local to a single call; none of them change the stored PID.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum PidFileError {
    #[error("Out of memory: cannot allocate {0} bytes")]
    #[diagnostic(
        code(pidfile::out_of_memory),
        help("The scratch buffer for the written text could not be allocated.")
    )]
    OutOfMemory(usize),

    #[error("Bad address: caller buffer of {declared} bytes is not readable")]
    #[diagnostic(
        code(pidfile::bad_address),
        help("The caller-declared length exceeds the memory it actually provided.")
    )]
    BadAddress { declared: usize },

    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(pidfile::invalid_argument),
        help("Write a single non-negative base-10 integer, optionally followed by a newline.")
    )]
    InvalidArgument(String),

    #[error("Permission denied: {0}")]
    #[diagnostic(
        code(pidfile::permission_denied),
        help("The configured access policy rejected this caller.")
    )]
    PermissionDenied(String),
}

impl PidFileError {
    /// Host errno value for this error
    #[must_use]
    pub const fn errno(&self) -> i32 {
        match self {
            PidFileError::OutOfMemory(_) => errno::ENOMEM,
            PidFileError::BadAddress { .. } => errno::EFAULT,
            PidFileError::InvalidArgument(_) => errno::EINVAL,
            PidFileError::PermissionDenied(_) => errno::EACCES,
        }
    }
}

impl From<PermissionError> for PidFileError {
    fn from(err: PermissionError) -> Self {
        PidFileError::PermissionDenied(err.to_string())
    }
}

/// Unified kernel error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum KernelError {
    #[error("Pid file error: {0}")]
    #[diagnostic(transparent)]
    PidFile(#[from] PidFileError),

    #[error("Proc registry error: {0}")]
    Proc(#[from] ProcError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(kernel::io_error),
        help("Reading host process information failed. Check that /proc is mounted.")
    )]
    Io(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(kernel::configuration_error),
        help("Invalid configuration. Review PROCPID_* environment variables.")
    )]
    Configuration(String),
}

impl From<std::io::Error> for KernelError {
    fn from(err: std::io::Error) -> Self {
        KernelError::Io(err.to_string())
    }
}

impl KernelError {
    /// Host errno value for this error
    #[must_use]
    pub fn errno(&self) -> i32 {
        match self {
            KernelError::PidFile(e) => e.errno(),
            KernelError::Proc(e) => e.errno(),
            KernelError::Permission(_) => errno::EACCES,
            KernelError::Io(_) => errno::EFAULT,
            KernelError::Configuration(_) => errno::EINVAL,
        }
    }
}

/// Convert a pid file error into an `std::io::Error` for the `Write` impl
impl From<PidFileError> for std::io::Error {
    fn from(err: PidFileError) -> Self {
        let kind = match err {
            PidFileError::OutOfMemory(_) => std::io::ErrorKind::OutOfMemory,
            PidFileError::BadAddress { .. } => std::io::ErrorKind::InvalidInput,
            PidFileError::InvalidArgument(_) => std::io::ErrorKind::InvalidInput,
            PidFileError::PermissionDenied(_) => std::io::ErrorKind::PermissionDenied,
        };
        std::io::Error::new(kind, err)
    }
}
