/*!
 * Proc Error Types
 * Structured, type-safe error handling for pseudo-file operations
 */

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::core::errors::PidFileError;
use crate::core::limits::errno;

/// Proc operation result
pub type ProcResult<T> = Result<T, ProcError>;

/// Proc registry and open-file errors
///
/// Variants with a context string require it to be non-empty.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum ProcError {
    #[error("Not found: {0}")]
    NotFound(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Already exists: {0}")]
    AlreadyExists(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Permission denied: {0}")]
    PermissionDenied(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Bad file descriptor: {0}")]
    BadDescriptor(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Bad address")]
    BadAddress,

    #[error("Out of memory")]
    OutOfMemory,
}

impl ProcError {
    /// Host errno value for this error
    #[must_use]
    pub const fn errno(&self) -> i32 {
        match self {
            ProcError::NotFound(_) => errno::ENOENT,
            ProcError::AlreadyExists(_) => errno::EEXIST,
            ProcError::PermissionDenied(_) => errno::EACCES,
            ProcError::InvalidArgument(_) => errno::EINVAL,
            ProcError::BadDescriptor(_) => errno::EBADF,
            ProcError::BadAddress => errno::EFAULT,
            ProcError::OutOfMemory => errno::ENOMEM,
        }
    }

    fn io_kind(&self) -> std::io::ErrorKind {
        use std::io::ErrorKind;
        match self {
            ProcError::NotFound(_) => ErrorKind::NotFound,
            ProcError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            ProcError::PermissionDenied(_) | ProcError::BadDescriptor(_) => {
                ErrorKind::PermissionDenied
            }
            ProcError::InvalidArgument(_) | ProcError::BadAddress => ErrorKind::InvalidInput,
            ProcError::OutOfMemory => ErrorKind::OutOfMemory,
        }
    }
}

impl From<PidFileError> for ProcError {
    fn from(err: PidFileError) -> Self {
        match err {
            PidFileError::OutOfMemory(_) => ProcError::OutOfMemory,
            PidFileError::BadAddress { .. } => ProcError::BadAddress,
            PidFileError::InvalidArgument(msg) => ProcError::InvalidArgument(msg),
            PidFileError::PermissionDenied(msg) => ProcError::PermissionDenied(msg),
        }
    }
}

impl From<ProcError> for std::io::Error {
    fn from(err: ProcError) -> Self {
        std::io::Error::new(err.io_kind(), err)
    }
}

/// Recover the proc error carried by an `io::Error`, if any
pub fn proc_error_of(err: &std::io::Error) -> Option<&ProcError> {
    err.get_ref().and_then(|inner| inner.downcast_ref::<ProcError>())
}

/// Deserialize and validate non-empty string for error messages
pub(super) fn deserialize_nonempty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Err(serde::de::Error::custom("error message must not be empty"));
    }
    Ok(s)
}
