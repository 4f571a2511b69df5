/*!
 * Proc Types
 * Shared types for proc node registration and access
 */

mod errors;
mod open_flags;
mod permissions;

pub use errors::{proc_error_of, ProcError, ProcResult};
pub use open_flags::OpenFlags;
pub use permissions::{Permissions, MAY_READ, MAY_WRITE};
