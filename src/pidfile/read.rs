/*!
 * Read Handler
 * Resolves the stored identifier at read time and renders the report
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

use super::store::PidStore;
use crate::core::types::{HostPid, PidValue, QueryPid, StateCode};
use crate::process::{CommName, PidKind, ProcessTable, TaskRecord};

/// Snapshot of a resolved task, valid for one read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSnapshot {
    pub name: CommName,
    pub pid: HostPid,
    pub state: StateCode,
}

impl From<TaskRecord> for ProcessSnapshot {
    fn from(task: TaskRecord) -> Self {
        Self {
            name: task.name,
            pid: task.pid,
            state: task.state,
        }
    }
}

/// Outcome of one read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum ProcessReport {
    /// Nothing has been written yet
    InvalidPid,
    /// No live task for the stored identifier
    NotFound { pid: QueryPid },
    Found(ProcessSnapshot),
}

impl fmt::Display for ProcessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessReport::InvalidPid => writeln!(f, "Invalid PID"),
            ProcessReport::NotFound { pid } => writeln!(f, "PID {} not found", pid),
            ProcessReport::Found(snapshot) => writeln!(
                f,
                "command = [{}] pid = [{}] state = [{}]",
                snapshot.name, snapshot.pid, snapshot.state
            ),
        }
    }
}

/// Renders the report for the currently stored identifier
///
/// Never fails; missing tasks are part of the report text.
#[derive(Clone)]
pub struct ReadHandler {
    store: PidStore,
    table: Arc<dyn ProcessTable>,
}

impl ReadHandler {
    pub fn new(store: PidStore, table: Arc<dyn ProcessTable>) -> Self {
        Self { store, table }
    }

    /// Resolve the stored identifier against the table right now
    pub fn report(&self) -> ProcessReport {
        let pid = match self.store.get() {
            PidValue::Unset => return ProcessReport::InvalidPid,
            PidValue::Set(pid) => pid,
        };

        let task = self
            .table
            .resolve(pid)
            .and_then(|handle| self.table.task_of(&handle, PidKind::Pid));

        match task {
            Some(task) => ProcessReport::Found(task.into()),
            None => {
                trace!(pid, table = self.table.name(), "target not found");
                ProcessReport::NotFound { pid }
            }
        }
    }

    /// Rendered report text
    pub fn render(&self) -> String {
        self.report().to_string()
    }
}

impl fmt::Debug for ReadHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadHandler")
            .field("store", &self.store)
            .field("table", &self.table.name())
            .finish()
    }
}
