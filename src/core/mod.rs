/*!
 * Core Module
 * Fundamental types, limits, configuration and error handling
 */

pub mod config;
pub mod errors;
pub mod guard;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use config::{AccessMode, ModuleConfig};
pub use errors::*;
pub use guard::{Guard, GuardError, GuardResult, ScratchBuffer, ScratchTracker};
pub use types::*;
