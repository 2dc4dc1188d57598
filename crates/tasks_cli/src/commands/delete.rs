//! Remove a task.

use crate::display::Printer;
use anyhow::Result;
use std::io::Write;
use tasks_core::{Store, TaskId};

pub fn run<W: Write>(store: &Store, printer: &mut Printer<W>, id: TaskId) -> Result<()> {
    let task = store.delete(id)?;

    printer.info(format!("Deleted task [{}] {}", task.id, task.description))?;
    Ok(())
}
