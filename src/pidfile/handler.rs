/*!
 * Pid File Handler
 * Read/write multiplexer bound to the proc node
 */

use std::sync::Arc;

use super::read::{ProcessReport, ReadHandler};
use super::store::PidStore;
use super::write::WriteHandler;
use crate::core::errors::PidFileResult;
use crate::core::guard::ScratchTracker;
use crate::core::types::{Credentials, PidValue};
use crate::permissions::{AccessPolicy, Permissive, PermissionRequest};
use crate::procfs::{ProcOps, ProcResult, UserSlice};
use crate::process::ProcessTable;

/// Both handlers of the pid file, sharing one store
///
/// Every call is authorized against the access policy before the store is
/// touched. Clones share the store, table and policy.
#[derive(Clone)]
pub struct PidFile {
    store: PidStore,
    reader: ReadHandler,
    writer: WriteHandler,
    policy: Arc<dyn AccessPolicy>,
    scratch: ScratchTracker,
}

impl PidFile {
    /// Pid file over `table` with a fresh store and the permissive policy
    pub fn new(table: Arc<dyn ProcessTable>) -> Self {
        Self::with_store(PidStore::new(), table)
    }

    /// Pid file over an existing store
    pub fn with_store(store: PidStore, table: Arc<dyn ProcessTable>) -> Self {
        let scratch = ScratchTracker::new();
        Self {
            reader: ReadHandler::new(store.clone(), table),
            writer: WriteHandler::new(store.clone(), scratch.clone()),
            store,
            policy: Arc::new(Permissive),
            scratch,
        }
    }

    /// Replace the access policy
    pub fn with_policy(mut self, policy: Arc<dyn AccessPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Set the target from caller bytes
    pub fn write(&self, caller: &Credentials, user: &UserSlice<'_>) -> PidFileResult<usize> {
        self.policy
            .check(&PermissionRequest::write(*caller))
            .into_result()?;
        self.writer.write(user)
    }

    /// Report for the current target
    pub fn read(&self, caller: &Credentials) -> PidFileResult<ProcessReport> {
        self.policy
            .check(&PermissionRequest::inspect(*caller))
            .into_result()?;
        Ok(self.reader.report())
    }

    /// Stored target
    pub fn target(&self) -> PidValue {
        self.store.get()
    }

    pub fn store(&self) -> &PidStore {
        &self.store
    }

    /// Scratch buffer accounting for the write path
    pub fn scratch(&self) -> &ScratchTracker {
        &self.scratch
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }
}

impl ProcOps for PidFile {
    fn show(&self, caller: &Credentials) -> ProcResult<String> {
        Ok(self.read(caller)?.to_string())
    }

    /// The offset is ignored; each write replaces the target
    fn write(&self, caller: &Credentials, user: &UserSlice<'_>, _pos: u64) -> ProcResult<usize> {
        Ok(PidFile::write(self, caller, user)?)
    }
}

impl std::fmt::Debug for PidFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PidFile")
            .field("target", &self.store.get())
            .field("reader", &self.reader)
            .field("policy", &self.policy.name())
            .finish()
    }
}

