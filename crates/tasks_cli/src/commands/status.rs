//! Status changes: start, complete, undo.

use crate::display::Printer;
use anyhow::Result;
use std::io::Write;
use tasks_core::{Store, TaskId};
use tracing::debug;

pub fn start<W: Write>(store: &Store, printer: &mut Printer<W>, id: TaskId) -> Result<()> {
    let task = store.start(id)?;
    debug!(id = %id, "task started");

    printer.info(format!("Started task {}.", task.id))?;
    printer.task(&task)?;
    Ok(())
}

pub fn complete<W: Write>(store: &Store, printer: &mut Printer<W>, id: TaskId) -> Result<()> {
    let task = store.complete(id)?;
    debug!(id = %id, "task completed");

    printer.info(format!("Completed task {}.", task.id))?;
    printer.task(&task)?;
    Ok(())
}

pub fn undo<W: Write>(store: &Store, printer: &mut Printer<W>, id: TaskId) -> Result<()> {
    let task = store.undo(id)?;
    debug!(id = %id, "task reopened");

    printer.info(format!("Task {} marked incomplete.", task.id))?;
    printer.task(&task)?;
    Ok(())
}
