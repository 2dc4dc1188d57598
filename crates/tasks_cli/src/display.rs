//! Terminal presentation: colored labels and task rendering.

use chrono::Local;
use console::style;
use std::io::{self, Write};
use tasks_core::{Task, TaskStatus};

/// Writes user-facing messages and task listings.
///
/// Passed explicitly to whatever needs to talk to the user; the store never
/// prints.
pub struct Printer<W: Write = io::Stdout> {
    out: W,
    color: bool,
}

impl Printer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn info(&mut self, msg: impl AsRef<str>) -> io::Result<()> {
        let label = style("Info:").green().force_styling(self.color);
        writeln!(self.out, "{} {}", label, msg.as_ref())
    }

    pub fn warn(&mut self, msg: impl AsRef<str>) -> io::Result<()> {
        let label = style("Warning:").yellow().force_styling(self.color);
        writeln!(self.out, "{} {}", label, msg.as_ref())
    }

    pub fn error(&mut self, msg: impl AsRef<str>) -> io::Result<()> {
        let label = style("Error:").red().force_styling(self.color);
        writeln!(self.out, "{} {}", label, msg.as_ref())
    }

    /// Whole line in blue.
    pub fn announce(&mut self, msg: impl AsRef<str>) -> io::Result<()> {
        let line = style(msg.as_ref()).blue().force_styling(self.color);
        writeln!(self.out, "{}", line)
    }

    pub fn line(&mut self, msg: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", msg.as_ref())
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    /// One-line summary: `[id] description (status)`.
    pub fn task(&mut self, task: &Task) -> io::Result<()> {
        let status = self.status_label(task.status);
        writeln!(self.out, "[{}] {} ({})", task.id, task.description, status)
    }

    pub fn tasks(&mut self, tasks: &[Task], empty: &str) -> io::Result<()> {
        if tasks.is_empty() {
            return self.info(empty);
        }
        for task in tasks {
            self.task(task)?;
        }
        Ok(())
    }

    /// Multi-line view with timestamps in local time.
    pub fn task_detail(&mut self, task: &Task) -> io::Result<()> {
        let fmt = "%Y-%m-%d %H:%M:%S";
        let status = self.status_label(task.status);
        writeln!(self.out, "Task {}", task.id)?;
        writeln!(self.out, "  Description: {}", task.description)?;
        writeln!(self.out, "  Status:      {}", status)?;
        writeln!(
            self.out,
            "  Created:     {}",
            task.created_at.with_timezone(&Local).format(fmt)
        )?;
        writeln!(
            self.out,
            "  Updated:     {}",
            task.updated_at.with_timezone(&Local).format(fmt)
        )
    }

    fn status_label(&self, status: TaskStatus) -> String {
        let label = style(status.to_string());
        let styled = match status {
            TaskStatus::Incomplete => label.yellow(),
            TaskStatus::InProgress => label.cyan(),
            TaskStatus::Complete => label.green(),
        };
        styled.force_styling(self.color).to_string()
    }
}
