/*!
 * Concurrency Tests
 * Racing writers and readers on one pid file
 */

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use procpid_kernel::core::types::{Credentials, PidValue};
use procpid_kernel::pidfile::PidFile;
use procpid_kernel::process::{TaskRecord, TaskTable};
use procpid_kernel::UserSlice;

fn caller() -> Credentials {
    Credentials::new(1000, 4242)
}

#[test]
fn test_racing_writers_leave_one_value() {
    const WRITERS: u64 = 8;

    let file = PidFile::new(Arc::new(TaskTable::new()));
    let barrier = Arc::new(Barrier::new(WRITERS as usize));

    let handles: Vec<_> = (1..=WRITERS)
        .map(|n| {
            let file = file.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let text = (n * 100).to_string();
                barrier.wait();
                file.write(&caller(), &UserSlice::new(text.as_bytes()))
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let allowed: HashSet<u64> = (1..=WRITERS).map(|n| n * 100).collect();
    match file.target() {
        PidValue::Set(pid) => assert!(allowed.contains(&pid), "unexpected pid {}", pid),
        PidValue::Unset => panic!("no write landed"),
    }

    let report = file.read(&caller()).unwrap().to_string();
    let matches = allowed
        .iter()
        .filter(|pid| report == format!("PID {} not found\n", pid))
        .count();
    assert_eq!(matches, 1);
}

#[test]
fn test_readers_never_see_torn_reports() {
    let table = TaskTable::new();
    table.insert(TaskRecord::new("alpha", 10, 0));
    table.insert(TaskRecord::new("beta", 20, 1));

    let file = PidFile::new(Arc::new(table));
    let allowed: HashSet<String> = [
        "Invalid PID\n",
        "command = [alpha] pid = [10] state = [0]\n",
        "command = [beta] pid = [20] state = [1]\n",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let allowed = Arc::new(allowed);
    let barrier = Arc::new(Barrier::new(4));

    let writers: Vec<_> = ["10", "20"]
        .into_iter()
        .map(|text| {
            let file = file.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..500 {
                    file.write(&caller(), &UserSlice::new(text.as_bytes()))
                        .unwrap();
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let file = file.clone();
            let barrier = Arc::clone(&barrier);
            let allowed = Arc::clone(&allowed);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..500 {
                    let report = file.read(&caller()).unwrap().to_string();
                    assert!(allowed.contains(&report), "torn report {:?}", report);
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    assert!(matches!(file.target(), PidValue::Set(10) | PidValue::Set(20)));
}

#[test]
fn test_rejected_writes_do_not_disturb_concurrent_value() {
    let file = PidFile::new(Arc::new(TaskTable::new()));
    file.write(&caller(), &UserSlice::new(b"5")).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let file = file.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    assert!(file.write(&caller(), &UserSlice::new(b"-5")).is_err());
                    assert!(file.write(&caller(), &UserSlice::new(b"5x")).is_err());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(file.target(), PidValue::Set(5));
    assert_eq!(file.scratch().outstanding(), 0);
}
