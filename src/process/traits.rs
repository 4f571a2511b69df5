/*!
 * Process Traits
 * Host process-table abstraction
 */

use super::types::{PidHandle, PidKind, TaskRecord};
use crate::core::types::QueryPid;

/// Read-only view of the host process table
///
/// The table is authoritative and owned by the host; implementations only
/// answer lookups. A task may exit between any two calls.
pub trait ProcessTable: Send + Sync {
    /// Resolve a numeric id to a pid handle
    fn resolve(&self, nr: QueryPid) -> Option<PidHandle>;

    /// Task of the given kind attached to a handle
    fn task_of(&self, handle: &PidHandle, kind: PidKind) -> Option<TaskRecord>;

    /// Table name for logging
    fn name(&self) -> &str {
        "process-table"
    }
}

impl<T: ProcessTable + ?Sized> ProcessTable for std::sync::Arc<T> {
    fn resolve(&self, nr: QueryPid) -> Option<PidHandle> {
        (**self).resolve(nr)
    }

    fn task_of(&self, handle: &PidHandle, kind: PidKind) -> Option<TaskRecord> {
        (**self).task_of(handle, kind)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
