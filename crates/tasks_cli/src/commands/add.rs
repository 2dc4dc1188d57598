//! Create a task.

use crate::display::Printer;
use anyhow::Result;
use std::io::Write;
use tasks_core::Store;
use tracing::debug;

pub fn run<W: Write>(store: &Store, printer: &mut Printer<W>, description: &str) -> Result<()> {
    let task = store.create(description)?;
    debug!(id = %task.id, "task created");

    printer.info(format!("Task created: [{}] {}", task.id, task.description))?;
    Ok(())
}
