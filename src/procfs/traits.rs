/*!
 * Proc Traits
 * Handler table a module registers for its pseudo-file
 */

use super::types::ProcResult;
use super::uaccess::UserSlice;
use crate::core::types::Credentials;

/// Operations dispatched to a registered proc node
///
/// Nodes are single-record: `show` renders the whole content, and the open
/// file serves it across reads.
pub trait ProcOps: Send + Sync {
    /// Render the node's content for one read pass
    fn show(&self, caller: &Credentials) -> ProcResult<String>;

    /// Accept a write of the caller's bytes at `pos`
    ///
    /// Returns the number of bytes consumed.
    fn write(&self, caller: &Credentials, user: &UserSlice<'_>, pos: u64) -> ProcResult<usize>;
}
