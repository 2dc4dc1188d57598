use crate::harness::{Assertion, Scenario};
use tasks_core::TaskStatus;

#[test]
fn test_state_round_trips_through_restart() {
    Scenario::new("round_trip")
        .create("a")
        .create("b")
        .wait_secs(30)
        .start(1)
        .complete(2)
        .edit(1, "a, edited")
        .restart()
        .assert(Assertion::UnchangedAcrossRestart)
        .assert_status(1, TaskStatus::InProgress)
        .assert_description(1, "a, edited")
        .assert(Assertion::UpdatedAfter { id: 1, secs: 30 })
        .run()
        .unwrap();
}

#[test]
fn test_crash_mid_write_keeps_last_durable_state() {
    Scenario::new("crash_mid_write")
        .create("saved")
        .start(1)
        .crash_mid_write(br#"{"tasks":[{"id":1,"descr"#)
        .restart()
        .assert(Assertion::UnchangedAcrossRestart)
        .assert_count(1)
        .assert_status(1, TaskStatus::InProgress)
        .run()
        .unwrap();
}

#[test]
fn test_next_write_replaces_stale_temp_file() {
    Scenario::new("stale_temp_file")
        .create("first")
        .crash_mid_write(b"garbage")
        .restart()
        .create("second")
        .assert_ok()
        .assert(Assertion::NoTempFile)
        .assert_ids(&[1, 2])
        .run()
        .unwrap();
}

#[test]
fn test_writes_leave_no_temp_file() {
    Scenario::new("no_temp_file")
        .create("a")
        .complete(1)
        .undo(1)
        .delete(1)
        .assert(Assertion::NoTempFile)
        .run()
        .unwrap();
}
