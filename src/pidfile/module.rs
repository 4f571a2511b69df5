/*!
 * Pid Module Lifecycle
 * Registers the pid file on init and removes it on exit
 */

use std::sync::Arc;
use tracing::{info, warn};

use super::handler::PidFile;
use crate::core::config::ModuleConfig;
use crate::core::errors::KernelError;
use crate::permissions::policy_for;
use crate::procfs::{ProcEntry, ProcRegistry};
use crate::process::ProcessTable;

/// Loaded pid module
///
/// Dropping the module unregisters the node if `exit` was not called.
pub struct PidModule {
    registry: ProcRegistry,
    entry: Option<ProcEntry>,
    file: PidFile,
}

impl PidModule {
    /// Create the node described by `config` and bind the pid file to it
    pub fn init(
        registry: &ProcRegistry,
        config: &ModuleConfig,
        table: Arc<dyn ProcessTable>,
    ) -> Result<Self, KernelError> {
        config.validate()?;

        let file = PidFile::new(table).with_policy(policy_for(config.access));
        let entry = registry.create(&config.node_name, config.mode, Arc::new(file.clone()))?;
        info!(
            policy = file.policy_name(),
            mode = %format!("{:o}", entry.mode().mode),
            "{} created",
            entry.path()
        );

        Ok(Self {
            registry: registry.clone(),
            entry: Some(entry),
            file,
        })
    }

    /// Handlers bound to the node
    pub fn file(&self) -> &PidFile {
        &self.file
    }

    /// Registered node, until exit
    pub fn entry(&self) -> Option<&ProcEntry> {
        self.entry.as_ref()
    }

    /// Remove the node
    pub fn exit(mut self) -> Result<(), KernelError> {
        self.unregister()
    }

    fn unregister(&mut self) -> Result<(), KernelError> {
        if let Some(entry) = self.entry.take() {
            self.registry.remove(&entry)?;
            info!("{} removed", entry.path());
        }
        Ok(())
    }
}

impl Drop for PidModule {
    fn drop(&mut self) {
        if let Err(e) = self.unregister() {
            warn!(error = %e, "Failed to remove pid node on drop");
        }
    }
}

impl std::fmt::Debug for PidModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PidModule")
            .field("entry", &self.entry)
            .field("file", &self.file)
            .finish()
    }
}
