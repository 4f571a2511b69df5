/*!
 * Read Handler Tests
 * Report rendering against a mocked process table
 */

use std::sync::Arc;

use mockall::mock;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use procpid_kernel::core::types::{Credentials, QueryPid};
use procpid_kernel::pidfile::{PidFile, ProcessReport};
use procpid_kernel::process::{PidHandle, PidKind, ProcessTable, TaskRecord};
use procpid_kernel::UserSlice;

mock! {
    pub Table {}

    impl ProcessTable for Table {
        fn resolve(&self, nr: QueryPid) -> Option<PidHandle>;
        fn task_of(&self, handle: &PidHandle, kind: PidKind) -> Option<TaskRecord>;
    }
}

fn caller() -> Credentials {
    Credentials::new(1000, 4242)
}

fn render(file: &PidFile) -> String {
    file.read(&caller()).unwrap().to_string()
}

#[test]
fn test_read_before_write_is_invalid() {
    let mut table = MockTable::new();
    table.expect_resolve().times(0);
    table.expect_task_of().times(0);

    let file = PidFile::new(Arc::new(table));
    assert_eq!(render(&file), "Invalid PID\n");
    assert_eq!(file.read(&caller()).unwrap(), ProcessReport::InvalidPid);
}

#[test]
fn test_initd_scenario() {
    let mut table = MockTable::new();
    table
        .expect_resolve()
        .with(eq(1))
        .returning(|nr| Some(PidHandle::new(nr as i32)));
    table
        .expect_task_of()
        .withf(|handle, kind| handle.nr() == 1 && *kind == PidKind::Pid)
        .returning(|_, _| Some(TaskRecord::new("initd", 1, 0)));

    let file = PidFile::new(Arc::new(table));
    assert_eq!(file.write(&caller(), &UserSlice::new(b"1")), Ok(1));
    assert_eq!(render(&file), "command = [initd] pid = [1] state = [0]\n");
}

#[test]
fn test_unresolved_pid_not_found() {
    let mut table = MockTable::new();
    table.expect_resolve().with(eq(4321)).returning(|_| None);
    table.expect_task_of().times(0);

    let file = PidFile::new(Arc::new(table));
    file.write(&caller(), &UserSlice::new(b"4321")).unwrap();
    assert_eq!(render(&file), "PID 4321 not found\n");
}

#[test]
fn test_handle_without_task_not_found() {
    let mut table = MockTable::new();
    table
        .expect_resolve()
        .returning(|nr| Some(PidHandle::new(nr as i32)));
    table.expect_task_of().times(1).returning(|_, _| None);

    let file = PidFile::new(Arc::new(table));
    file.write(&caller(), &UserSlice::new(b"77")).unwrap();
    assert_eq!(render(&file), "PID 77 not found\n");
}

#[test]
fn test_zero_never_reports_invalid() {
    let mut table = MockTable::new();
    table.expect_resolve().with(eq(0)).returning(|_| None);

    let file = PidFile::new(Arc::new(table));
    file.write(&caller(), &UserSlice::new(b"0")).unwrap();
    assert_eq!(render(&file), "PID 0 not found\n");
}

#[test]
fn test_resolved_pid_is_authoritative() {
    // The table answers with its own representation of the id
    let mut table = MockTable::new();
    table
        .expect_resolve()
        .returning(|_| Some(PidHandle::new(8)));
    table
        .expect_task_of()
        .returning(|_, _| Some(TaskRecord::new("kworker/0:1", 8, 0x402)));

    let file = PidFile::new(Arc::new(table));
    file.write(&caller(), &UserSlice::new(b"+008")).unwrap();
    assert_eq!(
        render(&file),
        "command = [kworker/0:1] pid = [8] state = [1026]\n"
    );
}

#[test]
fn test_each_read_resolves_again() {
    let mut table = MockTable::new();
    let mut seq = mockall::Sequence::new();
    table
        .expect_resolve()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|nr| Some(PidHandle::new(nr as i32)));
    table
        .expect_task_of()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Some(TaskRecord::new("short-lived", 55, 1)));
    table
        .expect_resolve()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| None);

    let file = PidFile::new(Arc::new(table));
    file.write(&caller(), &UserSlice::new(b"55")).unwrap();
    assert_eq!(
        render(&file),
        "command = [short-lived] pid = [55] state = [1]\n"
    );
    assert_eq!(render(&file), "PID 55 not found\n");
}

#[test]
fn test_rejected_write_reproduces_prior_report() {
    let mut table = MockTable::new();
    table
        .expect_resolve()
        .returning(|nr| Some(PidHandle::new(nr as i32)));
    table
        .expect_task_of()
        .returning(|handle, _| Some(TaskRecord::new("daemon", handle.nr(), 1)));

    let file = PidFile::new(Arc::new(table));
    file.write(&caller(), &UserSlice::new(b"300")).unwrap();
    let before = render(&file);

    assert!(file.write(&caller(), &UserSlice::new(b"-300")).is_err());
    assert!(file.write(&caller(), &UserSlice::new(b"3oo")).is_err());
    assert_eq!(render(&file), before);
}

#[test]
fn test_report_json_round_trip() {
    let mut table = MockTable::new();
    table
        .expect_resolve()
        .returning(|nr| Some(PidHandle::new(nr as i32)));
    table
        .expect_task_of()
        .returning(|_, _| Some(TaskRecord::new("initd", 1, 0)));

    let file = PidFile::new(Arc::new(table));
    file.write(&caller(), &UserSlice::new(b"1")).unwrap();
    let report = file.read(&caller()).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"outcome": "found", "name": "initd", "pid": 1, "state": 0})
    );
    let back: ProcessReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}
