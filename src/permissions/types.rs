/*!
 * Permission Types
 * Requests and decisions for pid file access checks
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Credentials;

/// Result type for permission operations
pub type PermissionResult<T> = Result<T, PermissionError>;

/// Permission errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "error")]
pub enum PermissionError {
    #[error("Permission denied: {reason}")]
    Denied { reason: String },
}

/// Action being performed on the pid file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Set the observed target
    Write,
    /// Read the target's snapshot
    Inspect,
}

/// Permission request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PermissionRequest {
    /// Caller making the request
    pub caller: Credentials,
    /// Action being performed
    pub action: Action,
}

impl PermissionRequest {
    pub fn new(caller: Credentials, action: Action) -> Self {
        Self { caller, action }
    }

    /// Target write request
    pub fn write(caller: Credentials) -> Self {
        Self::new(caller, Action::Write)
    }

    /// Snapshot read request
    pub fn inspect(caller: Credentials) -> Self {
        Self::new(caller, Action::Inspect)
    }
}

/// Permission decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PermissionResponse {
    pub request: PermissionRequest,
    pub allowed: bool,
    pub reason: String,
}

impl PermissionResponse {
    /// Create allowed response
    pub fn allow(request: PermissionRequest, reason: impl Into<String>) -> Self {
        Self {
            request,
            allowed: true,
            reason: reason.into(),
        }
    }

    /// Create denied response
    pub fn deny(request: PermissionRequest, reason: impl Into<String>) -> Self {
        Self {
            request,
            allowed: false,
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Convert a denial into an error
    pub fn into_result(self) -> PermissionResult<()> {
        if self.allowed {
            Ok(())
        } else {
            Err(PermissionError::Denied {
                reason: self.reason,
            })
        }
    }
}
