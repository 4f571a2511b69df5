/*!
 * PID Store
 * Shared cell holding the last accepted target identifier
 */

use parking_lot::RwLock;
use std::sync::Arc;

use crate::core::types::{PidValue, QueryPid};

/// Shared target identifier
///
/// One store backs both handlers of a registered node. Clones share the
/// same cell. Every `set` replaces the whole value, so a reader sees either
/// the old or the new identifier, never a mix.
#[derive(Debug, Clone, Default)]
pub struct PidStore {
    value: Arc<RwLock<PidValue>>,
}

impl PidStore {
    /// Create an unset store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored identifier
    pub fn set(&self, pid: QueryPid) {
        debug_assert!(pid <= i64::MAX as QueryPid);
        *self.value.write() = PidValue::Set(pid);
    }

    /// Current value
    #[inline]
    pub fn get(&self) -> PidValue {
        *self.value.read()
    }
}
