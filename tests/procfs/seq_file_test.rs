/*!
 * Seq File Tests
 * Lazy rendering, chunked reads and seek behavior of open handles
 */

use std::io::{Read, Seek, SeekFrom, Write};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use procpid_kernel::core::types::Credentials;
use procpid_kernel::procfs::{
    proc_error_of, OpenFlags, ProcError, ProcOps, ProcRegistry, ProcResult, UserSlice,
};

/// Node whose text changes on every render
#[derive(Default)]
struct Counter {
    renders: AtomicUsize,
    last_write_pos: AtomicU64,
}

impl ProcOps for Counter {
    fn show(&self, _caller: &Credentials) -> ProcResult<String> {
        let n = self.renders.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("render number {} of the counter node\n", n))
    }

    fn write(&self, _caller: &Credentials, user: &UserSlice<'_>, pos: u64) -> ProcResult<usize> {
        self.last_write_pos.store(pos, Ordering::SeqCst);
        if user.len() > 8 {
            return Err(ProcError::BadAddress);
        }
        Ok(user.len())
    }
}

fn open(flags: OpenFlags) -> (Arc<Counter>, procpid_kernel::SeqFile) {
    let registry = ProcRegistry::new();
    let counter = Arc::new(Counter::default());
    registry.create("counter", 0o666, counter.clone()).unwrap();
    let file = registry
        .open("counter", flags, Credentials::new(1000, 1))
        .unwrap();
    (counter, file)
}

#[test]
fn test_open_does_not_render() {
    let (counter, file) = open(OpenFlags::read_only());
    assert_eq!(counter.renders.load(Ordering::SeqCst), 0);
    assert_eq!(file.position(), 0);
}

#[test]
fn test_small_buffer_reads_one_render() {
    let (counter, mut file) = open(OpenFlags::read_only());

    let mut text = Vec::new();
    let mut chunk = [0u8; 5];
    loop {
        let n = file.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        text.extend_from_slice(&chunk[..n]);
    }

    assert_eq!(
        String::from_utf8(text).unwrap(),
        "render number 1 of the counter node\n"
    );
    assert_eq!(counter.renders.load(Ordering::SeqCst), 1);
    assert_eq!(file.position(), 36);
}

#[test]
fn test_seek_to_start_renders_again() {
    let (counter, mut file) = open(OpenFlags::read_only());

    let mut first = String::new();
    file.read_to_string(&mut first).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut second = String::new();
    file.read_to_string(&mut second).unwrap();

    assert_eq!(first, "render number 1 of the counter node\n");
    assert_eq!(second, "render number 2 of the counter node\n");
    assert_eq!(counter.renders.load(Ordering::SeqCst), 2);
}

#[test]
fn test_seek_to_same_position_keeps_text() {
    let (counter, mut file) = open(OpenFlags::read_only());

    let mut head = [0u8; 7];
    file.read_exact(&mut head).unwrap();
    assert_eq!(file.seek(SeekFrom::Current(0)).unwrap(), 7);

    let mut rest = String::new();
    file.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "number 1 of the counter node\n");
    assert_eq!(counter.renders.load(Ordering::SeqCst), 1);
}

#[test]
fn test_seek_relative_and_past_end() {
    let (_, mut file) = open(OpenFlags::read_only());

    assert_eq!(file.seek(SeekFrom::Start(7)).unwrap(), 7);
    assert_eq!(file.seek(SeekFrom::Current(-7)).unwrap(), 0);

    file.seek(SeekFrom::Start(1000)).unwrap();
    let mut buf = [0u8; 16];
    assert_eq!(file.read(&mut buf).unwrap(), 0);
}

#[test]
fn test_unsupported_seeks() {
    let (_, mut file) = open(OpenFlags::read_only());

    let err = file.seek(SeekFrom::End(0)).unwrap_err();
    assert!(matches!(
        proc_error_of(&err),
        Some(ProcError::InvalidArgument(_))
    ));

    let err = file.seek(SeekFrom::Current(-1)).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    assert_eq!(file.position(), 0);
}

#[test]
fn test_read_on_write_only_handle() {
    let (counter, mut file) = open(OpenFlags::write_only());

    let mut buf = [0u8; 8];
    let err = file.read(&mut buf).unwrap_err();
    let proc_err = proc_error_of(&err).unwrap();
    assert!(matches!(proc_err, ProcError::BadDescriptor(_)));
    assert_eq!(proc_err.errno(), 9);
    assert_eq!(counter.renders.load(Ordering::SeqCst), 0);
}

#[test]
fn test_write_on_read_only_handle() {
    let (_, mut file) = open(OpenFlags::read_only());
    let err = file.write_user(&UserSlice::new(b"1")).unwrap_err();
    assert!(matches!(err, ProcError::BadDescriptor(_)));
}

#[test]
fn test_write_passes_position_and_keeps_it() {
    let (counter, mut file) = open(OpenFlags::read_write());

    let mut head = [0u8; 4];
    file.read_exact(&mut head).unwrap();
    assert_eq!(file.write(b"12").unwrap(), 2);

    assert_eq!(counter.last_write_pos.load(Ordering::SeqCst), 4);
    assert_eq!(file.position(), 4);
}

#[test]
fn test_write_error_surfaces_through_io() {
    let (_, mut file) = open(OpenFlags::write_only());

    let err = file.write(b"123456789").unwrap_err();
    assert_eq!(proc_error_of(&err), Some(&ProcError::BadAddress));

    let err = file
        .write_user(&UserSlice::with_len(b"1", 64))
        .unwrap_err();
    assert_eq!(err.errno(), 14);
}
