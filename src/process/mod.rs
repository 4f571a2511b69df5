/*!
 * Process Module
 * Host process-table collaborators
 */

pub mod linux;
pub mod table;
pub mod traits;
pub mod types;

pub use linux::LinuxProcTable;
pub use table::TaskTable;
pub use traits::ProcessTable;
pub use types::{CommName, PidHandle, PidKind, TaskRecord};
