/*!
 * Access Policies
 * Authorization checks consulted before every pid file read and write
 */

use std::sync::Arc;
use tracing::warn;

use super::types::{Action, PermissionRequest, PermissionResponse};
use crate::core::config::AccessMode;

/// Access policy trait
pub trait AccessPolicy: Send + Sync {
    /// Evaluate a request
    fn evaluate(&self, request: &PermissionRequest) -> PermissionResponse;

    /// Policy name for logging
    fn name(&self) -> &str;

    /// Evaluate and log denials
    fn check(&self, request: &PermissionRequest) -> PermissionResponse {
        let response = self.evaluate(request);
        if !response.is_allowed() {
            warn!(
                policy = self.name(),
                uid = request.caller.uid,
                caller_pid = request.caller.pid,
                action = ?request.action,
                reason = %response.reason(),
                "Pid file access denied"
            );
        }
        response
    }
}

/// Allows every caller
#[derive(Debug, Clone, Copy, Default)]
pub struct Permissive;

impl AccessPolicy for Permissive {
    fn evaluate(&self, request: &PermissionRequest) -> PermissionResponse {
        PermissionResponse::allow(request.clone(), "permissive policy")
    }

    fn name(&self) -> &str {
        "permissive"
    }
}

/// Allows only the superuser
#[derive(Debug, Clone, Copy, Default)]
pub struct PrivilegedOnly;

impl AccessPolicy for PrivilegedOnly {
    fn evaluate(&self, request: &PermissionRequest) -> PermissionResponse {
        if request.caller.is_root() {
            return PermissionResponse::allow(request.clone(), "caller is root");
        }
        let verb = match request.action {
            Action::Write => "set the target pid",
            Action::Inspect => "inspect the target pid",
        };
        PermissionResponse::deny(
            request.clone(),
            format!("uid {} may not {}", request.caller.uid, verb),
        )
    }

    fn name(&self) -> &str {
        "privileged"
    }
}

/// Build the policy selected by configuration
pub fn policy_for(mode: AccessMode) -> Arc<dyn AccessPolicy> {
    match mode {
        AccessMode::Permissive => Arc::new(Permissive),
        AccessMode::Privileged => Arc::new(PrivilegedOnly),
    }
}
