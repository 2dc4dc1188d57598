use crate::harness::Scenario;
use tasks_core::{ErrorKind, TaskStatus};

#[test]
fn test_cannot_start_twice() {
    Scenario::new("restart_forbidden")
        .create("X")
        .start(1)
        .assert_status(1, TaskStatus::InProgress)
        .start(1)
        .assert_err(ErrorKind::InvalidTransition)
        .assert_status(1, TaskStatus::InProgress)
        .run()
        .unwrap();
}

#[test]
fn test_completed_task_is_frozen() {
    Scenario::new("complete_frozen")
        .create("X")
        .complete(1)
        .edit(1, "Y")
        .assert_err(ErrorKind::InvalidTransition)
        .assert_description(1, "X")
        .complete(1)
        .assert_err(ErrorKind::InvalidTransition)
        .start(1)
        .assert_err(ErrorKind::InvalidTransition)
        .assert_status(1, TaskStatus::Complete)
        .run()
        .unwrap();
}

#[test]
fn test_complete_from_incomplete_and_in_progress() {
    Scenario::new("complete_sources")
        .create("never started")
        .create("started")
        .start(2)
        .complete(1)
        .assert_ok()
        .complete(2)
        .assert_ok()
        .assert_status(1, TaskStatus::Complete)
        .assert_status(2, TaskStatus::Complete)
        .run()
        .unwrap();
}

#[test]
fn test_undo_always_allowed() {
    Scenario::new("undo_anywhere")
        .create("a")
        .undo(1)
        .assert_ok()
        .assert_status(1, TaskStatus::Incomplete)
        .start(1)
        .undo(1)
        .assert_ok()
        .assert_status(1, TaskStatus::Incomplete)
        .complete(1)
        .undo(1)
        .assert_ok()
        .undo(1)
        .assert_ok()
        .assert_status(1, TaskStatus::Incomplete)
        .edit(1, "a, reopened")
        .assert_ok()
        .run()
        .unwrap();
}

#[test]
fn test_rejected_transition_does_not_touch_timestamp() {
    Scenario::new("rejected_keeps_timestamp")
        .create("X")
        .wait_secs(10)
        .complete(1)
        .wait_secs(10)
        .complete(1)
        .assert_err(ErrorKind::InvalidTransition)
        .assert(crate::harness::Assertion::UpdatedAfter { id: 1, secs: 10 })
        .run()
        .unwrap();
}
