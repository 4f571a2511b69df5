/*!
 * Permissions Module
 * Explicit authorization for pid file reads and writes
 *
 * Mode bits on the node only gate `open`. Every read and write is checked
 * again against an [`AccessPolicy`] so the integrator decides who may set
 * the target and who may see its scheduler state.
 *
 * ## Usage
 * ```ignore
 * use procpid_kernel::permissions::{AccessPolicy, PermissionRequest, PrivilegedOnly};
 *
 * let request = PermissionRequest::write(caller);
 * PrivilegedOnly.check(&request).into_result()?;
 * ```
 */

pub mod policy;
pub mod types;

pub use policy::{policy_for, AccessPolicy, Permissive, PrivilegedOnly};
pub use types::{Action, PermissionError, PermissionRequest, PermissionResponse, PermissionResult};
