/*!
 * Pid File Module
 * Write a PID in, read the target's scheduling snapshot back
 *
 * ## Flow
 * - write: caller bytes -> scratch copy -> parse -> [`PidStore`] replace
 * - read: [`PidStore`] -> process table lookup -> report text
 *
 * The target is resolved on every read, so a process that exits after the
 * write shows up as `PID <n> not found`.
 *
 * ## Usage
 * ```ignore
 * let module = PidModule::init(&registry, &ModuleConfig::default(), table)?;
 * let mut file = registry.open("pid", OpenFlags::read_write(), caller)?;
 * file.write_all(b"1\n")?;
 * let mut report = String::new();
 * file.read_to_string(&mut report)?;
 * ```
 */

pub mod handler;
pub mod module;
pub mod parse;
pub mod read;
pub mod store;
pub mod write;

pub use handler::PidFile;
pub use module::PidModule;
pub use parse::{parse_pid, ParseError};
pub use read::{ProcessReport, ProcessSnapshot, ReadHandler};
pub use store::PidStore;
pub use write::WriteHandler;
