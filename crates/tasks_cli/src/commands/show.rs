//! Listing and lookup.

use crate::command::Listing;
use crate::display::Printer;
use anyhow::Result;
use std::io::Write;
use tasks_core::{Store, TaskStatus};

pub fn run<W: Write>(store: &Store, printer: &mut Printer<W>, listing: Listing) -> Result<()> {
    match listing {
        Listing::One(id) => {
            let task = store.get(id)?;
            printer.task_detail(&task)?;
        }
        Listing::All => {
            let tasks = store.list()?;
            printer.tasks(&tasks, "No tasks yet. Use 'add <description>' to create one.")?;
        }
        Listing::Open => {
            let tasks = store.list_open()?;
            printer.tasks(&tasks, "Nothing left to do.")?;
        }
        Listing::Status(status) => {
            let tasks = store.list_by_status(status)?;
            let empty = match status {
                TaskStatus::Incomplete => "No incomplete tasks.",
                TaskStatus::InProgress => "No started tasks.",
                TaskStatus::Complete => "No completed tasks.",
            };
            printer.tasks(&tasks, empty)?;
        }
    }
    Ok(())
}
