//! Change a task's description.

use crate::display::Printer;
use anyhow::Result;
use std::io::Write;
use tasks_core::{Store, TaskId};

pub fn run<W: Write>(
    store: &Store,
    printer: &mut Printer<W>,
    id: TaskId,
    description: &str,
) -> Result<()> {
    let task = store.edit(id, description)?;

    printer.info(format!("Task {} updated.", task.id))?;
    printer.task(&task)?;
    Ok(())
}
