/*!
 * Proc Registry
 * Creates, removes and opens pseudo-file nodes
 */

use ahash::RandomState;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use super::seq_file::SeqFile;
use super::traits::ProcOps;
use super::types::*;
use crate::core::types::{Credentials, Uid};

/// Owner of every node created through the registry
pub const NODE_OWNER: Uid = 0;

/// Registered node
struct ProcNode {
    mode: Permissions,
    ops: Arc<dyn ProcOps>,
}

/// Handle returned by [`ProcRegistry::create`]
///
/// Pass it back to [`ProcRegistry::remove`] on teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcEntry {
    name: String,
    mode: Permissions,
}

impl ProcEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> Permissions {
        self.mode
    }

    /// Path the node appears under
    pub fn path(&self) -> String {
        format!("/proc/{}", self.name)
    }
}

/// Flat registry of proc nodes
///
/// Clones share the same node table.
#[derive(Clone)]
pub struct ProcRegistry {
    nodes: Arc<DashMap<String, ProcNode, RandomState>>,
}

impl ProcRegistry {
    pub fn new() -> Self {
        Self {
            nodes: Arc::new(DashMap::with_hasher(RandomState::new())),
        }
    }

    /// Create a node dispatching to `ops`
    pub fn create(&self, name: &str, mode: u32, ops: Arc<dyn ProcOps>) -> ProcResult<ProcEntry> {
        if name.is_empty() || name.contains('/') {
            return Err(ProcError::InvalidArgument(format!(
                "invalid node name: {:?}",
                name
            )));
        }

        let mode = Permissions::new(mode);
        match self.nodes.entry(name.to_string()) {
            Entry::Occupied(_) => Err(ProcError::AlreadyExists(format!("/proc/{}", name))),
            Entry::Vacant(slot) => {
                slot.insert(ProcNode { mode, ops });
                debug!(name, mode = %format!("{:o}", mode.mode), "proc node created");
                Ok(ProcEntry {
                    name: name.to_string(),
                    mode,
                })
            }
        }
    }

    /// Remove a node; open handles keep working until dropped
    pub fn remove(&self, entry: &ProcEntry) -> ProcResult<()> {
        match self.nodes.remove(&entry.name) {
            Some(_) => {
                debug!(name = %entry.name, "proc node removed");
                Ok(())
            }
            None => Err(ProcError::NotFound(entry.path())),
        }
    }

    /// Open a node, checking its mode bits against the caller
    pub fn open(&self, name: &str, flags: OpenFlags, caller: Credentials) -> ProcResult<SeqFile> {
        flags.validate()?;

        let (mode, ops) = {
            let node = self
                .nodes
                .get(name)
                .ok_or_else(|| ProcError::NotFound(format!("/proc/{}", name)))?;
            (node.mode, node.ops.clone())
        };

        if !mode.allows(caller.uid, NODE_OWNER, flags.access_mask()) {
            return Err(ProcError::PermissionDenied(format!(
                "uid {} cannot open /proc/{} (mode {:o})",
                caller.uid, name, mode.mode
            )));
        }

        Ok(SeqFile::new(ops, caller, flags))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Mode of a registered node
    pub fn mode_of(&self, name: &str) -> Option<Permissions> {
        self.nodes.get(name).map(|node| node.mode)
    }

    /// Sorted node names
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.nodes.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

impl Default for ProcRegistry {
    fn default() -> Self {
        Self::new()
    }
}
