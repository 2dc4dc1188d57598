//! The interactive read-dispatch loop.

use crate::command::{self, Command, ParseError};
use crate::commands;
use crate::display::Printer;
use anyhow::{Context, Result};
use std::future::Future;
use std::io::Write;
use tasks_core::{ErrorKind, Store, TaskError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

/// Whether the loop should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// REPL state: the store and the printer commands render through.
pub struct Repl<'a, W: Write> {
    store: &'a Store,
    printer: &'a mut Printer<W>,
}

impl<'a, W: Write> Repl<'a, W> {
    pub fn new(store: &'a Store, printer: &'a mut Printer<W>) -> Self {
        Self { store, printer }
    }

    /// Reads lines from `input` until `exit`, end of input, or `shutdown`
    /// resolves.
    ///
    /// `shutdown` is only observed between lines: a command that has started
    /// always runs to completion, so an interrupt never cuts a store write
    /// short.
    pub async fn run<R, S>(&mut self, input: R, shutdown: S) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        S: Future<Output = ()>,
    {
        let mut lines = input.lines();
        tokio::pin!(shutdown);

        loop {
            self.printer.prompt()?;
            tokio::select! {
                biased;
                () = &mut shutdown => {
                    self.printer.line("")?;
                    self.printer.warn("Application interrupted. Ensuring graceful shutdown.")?;
                    break;
                }
                line = lines.next_line() => {
                    let Some(line) = line.context("failed to read input")? else {
                        self.printer.line("")?;
                        break;
                    };
                    if self.handle_line(&line)? == Flow::Exit {
                        break;
                    }
                }
            }
        }

        self.printer.info("Application closing. Goodbye!")?;
        Ok(())
    }

    /// Parses and executes one line, reporting recoverable failures.
    ///
    /// Only output failures are returned as errors.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let command = match command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                self.report_parse_error(&e)?;
                return Ok(Flow::Continue);
            }
        };

        debug!(?command, "dispatching");
        match self.execute(command) {
            Ok(flow) => Ok(flow),
            Err(e) => match e.downcast::<TaskError>() {
                Ok(task_err) => {
                    self.report_task_error(&task_err)?;
                    Ok(Flow::Continue)
                }
                Err(other) => Err(other),
            },
        }
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        let store = self.store;
        let printer = &mut *self.printer;
        match command {
            Command::Help => commands::help::run(printer)?,
            Command::Add { description } => commands::add::run(store, printer, &description)?,
            Command::Edit { id, description } => {
                commands::edit::run(store, printer, id, &description)?
            }
            Command::Show(listing) => commands::show::run(store, printer, listing)?,
            Command::Start(id) => commands::status::start(store, printer, id)?,
            Command::Complete(id) => commands::status::complete(store, printer, id)?,
            Command::Undo(id) => commands::status::undo(store, printer, id)?,
            Command::Delete(id) => commands::delete::run(store, printer, id)?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn report_parse_error(&mut self, err: &ParseError) -> Result<()> {
        self.printer.warn(err.to_string())?;
        Ok(())
    }

    fn report_task_error(&mut self, err: &TaskError) -> Result<()> {
        match err.kind() {
            ErrorKind::StorageUnavailable | ErrorKind::Config => {
                warn!(error = %err, "store operation failed");
                self.printer.error(err.to_string())?;
            }
            ErrorKind::NotFound | ErrorKind::DuplicateTask | ErrorKind::InvalidTransition => {
                self.printer.warn(capitalize(&err.to_string()))?;
            }
        }
        if let Some(hint) = err.recovery_suggestion() {
            self.printer.line(format!("  {hint}"))?;
        }
        Ok(())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
