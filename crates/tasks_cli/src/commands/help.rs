//! Command reference.

use crate::display::Printer;
use std::io::{self, Write};

const COMMANDS: &[(&str, &str)] = &[
    ("help", "Show available commands"),
    ("add <description>", "Create a task"),
    ("edit <id> <description>", "Change the description of an open task"),
    ("show all|open|incomplete|started|complete", "List tasks"),
    ("show <id>", "Show one task in detail"),
    ("start <id>", "Mark a task as in progress"),
    ("complete <id>", "Mark a task as complete"),
    ("undo <id>", "Mark a task as incomplete again"),
    ("delete <id>", "Delete a task"),
    ("exit", "Close the program"),
];

pub fn run<W: Write>(printer: &mut Printer<W>) -> io::Result<()> {
    printer.line("A list of commands is found below.")?;
    for (usage, summary) in COMMANDS {
        printer.line(format!("\t{usage:<44} {summary}"))?;
    }
    Ok(())
}
