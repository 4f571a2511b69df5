/*!
 * In-Memory Process Table
 * Concurrent task registry used by tests and the demo binary
 */

use ahash::RandomState;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use super::traits::ProcessTable;
use super::types::{PidHandle, PidKind, TaskRecord};
use crate::core::types::{HostPid, QueryPid, StateCode};

/// Slot for one numeric id
#[derive(Debug, Clone)]
struct PidSlot {
    /// `None` when the id is still allocated but its task is gone
    task: Option<TaskRecord>,
}

/// In-memory process table
///
/// Every task leads its own thread group. Process-group and session
/// leadership is not modelled, so those kinds never resolve to a task.
#[derive(Clone, Default)]
pub struct TaskTable {
    slots: Arc<DashMap<HostPid, PidSlot, RandomState>>,
}

impl TaskTable {
    pub fn new() -> Self {
        Self {
            slots: Arc::new(DashMap::with_hasher(RandomState::new())),
        }
    }

    /// Table pre-populated with the given tasks
    pub fn with_tasks<I: IntoIterator<Item = TaskRecord>>(tasks: I) -> Self {
        let table = Self::new();
        for task in tasks {
            table.insert(task);
        }
        table
    }

    /// Add or replace a task under its own pid
    pub fn insert(&self, task: TaskRecord) {
        debug!(pid = task.pid, name = %task.name, "task inserted");
        self.slots.insert(task.pid, PidSlot { task: Some(task) });
    }

    /// Keep `nr` allocated without a task attached
    pub fn insert_detached(&self, nr: HostPid) {
        self.slots.insert(nr, PidSlot { task: None });
    }

    /// Drop the task and free its id
    pub fn remove(&self, nr: HostPid) -> Option<TaskRecord> {
        self.slots.remove(&nr).and_then(|(_, slot)| slot.task)
    }

    /// Detach the task but keep the id allocated
    pub fn detach(&self, nr: HostPid) -> Option<TaskRecord> {
        self.slots.get_mut(&nr).and_then(|mut slot| slot.task.take())
    }

    /// Update a task's run-state code
    pub fn set_state(&self, nr: HostPid, state: StateCode) -> bool {
        match self.slots.get_mut(&nr) {
            Some(mut slot) => match slot.task.as_mut() {
                Some(task) => {
                    task.state = state;
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Number of allocated ids
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl ProcessTable for TaskTable {
    fn resolve(&self, nr: QueryPid) -> Option<PidHandle> {
        let nr = HostPid::try_from(nr).ok()?;
        self.slots.contains_key(&nr).then(|| PidHandle::new(nr))
    }

    fn task_of(&self, handle: &PidHandle, kind: PidKind) -> Option<TaskRecord> {
        match kind {
            PidKind::Pid | PidKind::Tgid => self
                .slots
                .get(&handle.nr())
                .and_then(|slot| slot.task.clone()),
            PidKind::Pgid | PidKind::Sid => None,
        }
    }

    fn name(&self) -> &str {
        "memory"
    }
}
