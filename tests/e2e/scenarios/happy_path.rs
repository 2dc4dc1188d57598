use crate::harness::{Assertion, Scenario};
use tasks_core::{ErrorKind, TaskStatus};

#[test]
fn test_empty_store_bootstrap() {
    Scenario::new("empty_bootstrap")
        .assert_count(0)
        .assert(Assertion::Custom(Box::new(|store: &tasks_core::Store| {
            anyhow::ensure!(store.path().exists(), "task file was not created");
            Ok(())
        })))
        .run()
        .unwrap();
}

#[test]
fn test_task_lifecycle() {
    Scenario::new("lifecycle")
        .create("Buy milk")
        .assert_ok()
        .wait_secs(60)
        .start(1)
        .assert_ok()
        .assert_status(1, TaskStatus::InProgress)
        .assert(Assertion::UpdatedAfter { id: 1, secs: 60 })
        .wait_secs(60)
        .edit(1, "Buy oat milk")
        .assert_ok()
        .assert_description(1, "Buy oat milk")
        .assert(Assertion::UpdatedAfter { id: 1, secs: 120 })
        .complete(1)
        .assert_ok()
        .assert_status(1, TaskStatus::Complete)
        .delete(1)
        .assert_ok()
        .assert(Assertion::NoTask { id: 1 })
        .assert_count(0)
        .run()
        .unwrap();
}

#[test]
fn test_duplicate_rejected() {
    Scenario::new("duplicate")
        .create("Buy milk")
        .create("Buy milk")
        .assert_err(ErrorKind::DuplicateTask)
        .assert_count(1)
        .create("Buy Milk")
        .assert_ok()
        .assert_count(2)
        .run()
        .unwrap();
}

#[test]
fn test_not_found_on_empty_store() {
    Scenario::new("not_found")
        .get(999)
        .assert_err(ErrorKind::NotFound)
        .delete(999)
        .assert_err(ErrorKind::NotFound)
        .assert_count(0)
        .run()
        .unwrap();
}

#[test]
fn test_list_keeps_insertion_order() {
    Scenario::new("insertion_order")
        .create("c")
        .create("a")
        .create("b")
        .complete(2)
        .edit(1, "c2")
        .assert_ids(&[1, 2, 3])
        .run()
        .unwrap();
}
