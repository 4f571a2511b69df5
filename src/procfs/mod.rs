/*!
 * Proc Filesystem Glue
 * Pseudo-file registration and the open/read/write/seek/release lifecycle
 */

pub mod registry;
pub mod seq_file;
pub mod traits;
pub mod types;
pub mod uaccess;

// Re-exports
pub use registry::{ProcEntry, ProcRegistry};
pub use seq_file::SeqFile;
pub use traits::ProcOps;
pub use types::{proc_error_of, OpenFlags, Permissions, ProcError, ProcResult};
pub use uaccess::{UserFault, UserSlice};
