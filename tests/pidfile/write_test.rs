/*!
 * Write Handler Tests
 * Parsing, rejection and buffer release on the write path
 */

use std::sync::Arc;

use pretty_assertions::assert_eq;
use procpid_kernel::core::types::{Credentials, PidValue};
use procpid_kernel::pidfile::PidFile;
use procpid_kernel::process::TaskTable;
use procpid_kernel::{PidFileError, UserSlice};
use proptest::prelude::*;

fn pid_file() -> PidFile {
    PidFile::new(Arc::new(TaskTable::new()))
}

fn caller() -> Credentials {
    Credentials::new(1000, 4242)
}

#[test]
fn test_write_one_returns_byte_count() {
    let file = pid_file();
    assert_eq!(file.write(&caller(), &UserSlice::new(b"1")), Ok(1));
    assert_eq!(file.target(), PidValue::Set(1));
}

#[test]
fn test_write_with_newline_like_echo() {
    let file = pid_file();
    assert_eq!(file.write(&caller(), &UserSlice::new(b"1234\n")), Ok(5));
    assert_eq!(file.target(), PidValue::Set(1234));
}

#[test]
fn test_empty_write_rejected() {
    let file = pid_file();
    let err = file.write(&caller(), &UserSlice::new(b"")).unwrap_err();
    assert!(matches!(err, PidFileError::InvalidArgument(_)));
    assert_eq!(file.target(), PidValue::Unset);
}

#[test]
fn test_max_value_boundary() {
    let file = pid_file();
    let max = i64::MAX.to_string();
    assert_eq!(
        file.write(&caller(), &UserSlice::new(max.as_bytes())),
        Ok(max.len())
    );
    assert_eq!(file.target(), PidValue::Set(i64::MAX as u64));

    let over = (i64::MAX as u64 + 1).to_string();
    let err = file
        .write(&caller(), &UserSlice::new(over.as_bytes()))
        .unwrap_err();
    assert!(matches!(err, PidFileError::InvalidArgument(_)));
    assert_eq!(file.target(), PidValue::Set(i64::MAX as u64));
}

#[test]
fn test_negative_keeps_previous_value() {
    let file = pid_file();
    file.write(&caller(), &UserSlice::new(b"12")).unwrap();

    let err = file.write(&caller(), &UserSlice::new(b"-5")).unwrap_err();
    assert_eq!(err.errno(), 22);
    assert_eq!(file.target(), PidValue::Set(12));
}

#[test]
fn test_last_write_wins() {
    let file = pid_file();
    file.write(&caller(), &UserSlice::new(b"10")).unwrap();
    file.write(&caller(), &UserSlice::new(b"20")).unwrap();
    assert_eq!(file.target(), PidValue::Set(20));
}

#[test]
fn test_fault_reports_bad_address() {
    let file = pid_file();
    let err = file
        .write(&caller(), &UserSlice::with_len(b"12", 64))
        .unwrap_err();
    assert_eq!(err, PidFileError::BadAddress { declared: 64 });
    assert_eq!(err.errno(), 14);
    assert_eq!(file.target(), PidValue::Unset);
}

#[test]
fn test_scratch_released_on_every_path() {
    let file = pid_file();
    let _ = file.write(&caller(), &UserSlice::new(b"7"));
    let _ = file.write(&caller(), &UserSlice::new(b"x"));
    let _ = file.write(&caller(), &UserSlice::new(b"-1"));
    let _ = file.write(&caller(), &UserSlice::with_len(b"1", 8));
    let _ = file.write(&caller(), &UserSlice::with_len(b"1", isize::MAX as usize));

    assert_eq!(file.scratch().outstanding(), 0);
    // The allocation failure never produced a buffer
    assert_eq!(file.scratch().acquired(), 4);
}

proptest! {
    #[test]
    fn prop_signed_values(value in any::<i64>()) {
        let file = pid_file();
        file.write(&caller(), &UserSlice::new(b"3")).unwrap();

        let text = value.to_string();
        let result = file.write(&caller(), &UserSlice::new(text.as_bytes()));
        if value >= 0 {
            prop_assert_eq!(result, Ok(text.len()));
            prop_assert_eq!(file.target(), PidValue::Set(value as u64));
        } else {
            prop_assert!(matches!(result, Err(PidFileError::InvalidArgument(_))));
            prop_assert_eq!(file.target(), PidValue::Set(3));
        }
    }

    #[test]
    fn prop_trailing_garbage_rejected(value in 0u32..1_000_000, junk in "[a-z .,]{1,4}") {
        let file = pid_file();
        let text = format!("{}{}", value, junk);
        let result = file.write(&caller(), &UserSlice::new(text.as_bytes()));
        prop_assert!(matches!(result, Err(PidFileError::InvalidArgument(_))));
        prop_assert_eq!(file.target(), PidValue::Unset);
    }

    #[test]
    fn prop_last_write_wins(values in prop::collection::vec(0u32..=u32::MAX, 1..16)) {
        let file = pid_file();
        for v in &values {
            file.write(&caller(), &UserSlice::new(v.to_string().as_bytes())).unwrap();
        }
        let last = *values.last().unwrap();
        prop_assert_eq!(file.target(), PidValue::Set(u64::from(last)));
    }
}
