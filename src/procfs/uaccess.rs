/*!
 * User Access
 * Bounded copies of caller-supplied memory into kernel-owned buffers
 */

use thiserror::Error;

/// Copy failed because part of the caller's region is not readable
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("fault copying {requested} bytes: only {mapped} readable")]
pub struct UserFault {
    pub requested: usize,
    pub mapped: usize,
}

/// Caller memory region with a caller-declared length
///
/// `len` is what the caller claims; `mapped` is what is actually readable.
/// A declared length past the mapped bytes faults on copy, like an unmapped
/// page would.
#[derive(Debug, Clone, Copy)]
pub struct UserSlice<'a> {
    mapped: &'a [u8],
    len: usize,
}

impl<'a> UserSlice<'a> {
    /// Region whose declared length matches its readable bytes
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            mapped: bytes,
            len: bytes.len(),
        }
    }

    /// Region with an explicit declared length
    pub const fn with_len(mapped: &'a [u8], len: usize) -> Self {
        Self { mapped, len }
    }

    /// Caller-declared length
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Append exactly `count` bytes from the caller's region to `dst`
///
/// Bounds are checked before `dst` is touched, so a fault leaves it as it
/// was. Never reads past the declared length.
pub fn copy_from_user(
    dst: &mut Vec<u8>,
    src: &UserSlice<'_>,
    count: usize,
) -> Result<(), UserFault> {
    if count > src.len || count > src.mapped.len() {
        return Err(UserFault {
            requested: count,
            mapped: src.mapped.len().min(src.len),
        });
    }
    dst.extend_from_slice(&src.mapped[..count]);
    Ok(())
}

/// Copy as much of `src` as fits into the caller's buffer
pub fn copy_to_user(dst: &mut [u8], src: &[u8]) -> usize {
    let count = dst.len().min(src.len());
    dst[..count].copy_from_slice(&src[..count]);
    count
}
