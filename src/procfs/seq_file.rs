/*!
 * Single-Record Seq File
 * Open-file handle that renders a node once and serves it across reads
 */

use std::io::{self, Read, Seek, SeekFrom, Write};
use std::sync::Arc;

use super::traits::ProcOps;
use super::types::{OpenFlags, ProcError};
use super::uaccess::{copy_to_user, UserSlice};
use crate::core::types::Credentials;

/// Open handle on a proc node
///
/// The record is rendered lazily by the first read and kept until the
/// position is moved with `seek`, so a caller with a small buffer reads one
/// consistent report in pieces. Writes go straight to the node and do not
/// move the read position. Dropping the handle releases the rendered text.
pub struct SeqFile {
    ops: Arc<dyn ProcOps>,
    caller: Credentials,
    flags: OpenFlags,
    buf: Option<String>,
    pos: u64,
}

impl SeqFile {
    pub(super) fn new(ops: Arc<dyn ProcOps>, caller: Credentials, flags: OpenFlags) -> Self {
        Self {
            ops,
            caller,
            flags,
            buf: None,
            pos: 0,
        }
    }

    /// Current read position
    #[inline]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Flags the handle was opened with
    #[inline]
    pub fn flags(&self) -> OpenFlags {
        self.flags
    }

    /// Write a caller region with an explicit declared length
    ///
    /// `Write::write` covers the common case where the whole slice is
    /// readable; this entry point lets the caller claim more than it mapped.
    pub fn write_user(&mut self, user: &UserSlice<'_>) -> Result<usize, ProcError> {
        if !self.flags.write {
            return Err(ProcError::BadDescriptor("not opened for writing".into()));
        }
        self.ops.write(&self.caller, user, self.pos)
    }

    fn fill(&mut self) -> Result<&str, ProcError> {
        if self.buf.is_none() {
            self.buf = Some(self.ops.show(&self.caller)?);
        }
        Ok(self.buf.as_deref().unwrap_or_default())
    }
}

impl Read for SeqFile {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if !self.flags.read {
            return Err(ProcError::BadDescriptor("not opened for reading".into()).into());
        }
        let pos = self.pos;
        let text = self.fill()?;
        let start = usize::try_from(pos).unwrap_or(usize::MAX).min(text.len());
        let count = copy_to_user(out, &text.as_bytes()[start..]);
        self.pos += count as u64;
        Ok(count)
    }
}

impl Write for SeqFile {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Ok(self.write_user(&UserSlice::new(data))?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for SeqFile {
    /// Only absolute and relative seeks are supported
    fn seek(&mut self, target: SeekFrom) -> io::Result<u64> {
        let new_pos = match target {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::Current(delta) => self.pos.checked_add_signed(delta),
            SeekFrom::End(_) => {
                return Err(ProcError::InvalidArgument("seek from end unsupported".into()).into())
            }
        };
        let new_pos = new_pos
            .ok_or_else(|| ProcError::InvalidArgument("seek to a negative offset".into()))?;

        if new_pos != self.pos {
            self.buf = None;
            self.pos = new_pos;
        }
        Ok(self.pos)
    }
}

impl std::fmt::Debug for SeqFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeqFile")
            .field("caller", &self.caller)
            .field("flags", &self.flags)
            .field("pos", &self.pos)
            .field("rendered", &self.buf.is_some())
            .finish()
    }
}
