//! REPL line parsing.
//!
//! A line is a case-insensitive command word followed by whitespace-separated
//! arguments. Words starting with `--` are flags and never become part of a
//! description.

use std::fmt;
use tasks_core::{TaskId, TaskStatus};

/// A fully parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Add { description: String },
    Edit { id: TaskId, description: String },
    Show(Listing),
    Start(TaskId),
    Complete(TaskId),
    Undo(TaskId),
    Delete(TaskId),
    Exit,
}

/// What `show` should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    All,
    Open,
    Status(TaskStatus),
    One(TaskId),
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },
    InvalidId(String),
    EmptyDescription,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand(word) => {
                write!(f, "Unknown input [{word}]. Type HELP for a list of commands.")
            }
            Self::MissingArgument { command, usage } => write!(
                f,
                "Insufficient arguments for '{command}'. Usage: {usage}. Type 'help' for more information."
            ),
            Self::InvalidId(raw) => write!(f, "Enter a valid numeric ID (got '{raw}')."),
            Self::EmptyDescription => write!(f, "A task needs a description."),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match head.to_lowercase().as_str() {
        "help" | "commands" => Command::Help,
        "add" | "new" => Command::Add {
            description: description(&args)?,
        },
        "edit" | "update" | "change" => {
            let usage = "edit <id> <description>";
            let raw = args.first().ok_or(ParseError::MissingArgument {
                command: "edit",
                usage,
            })?;
            let id = parse_id(raw)?;
            let description = match description(&args[1..]) {
                Err(ParseError::EmptyDescription) => {
                    return Err(ParseError::MissingArgument {
                        command: "edit",
                        usage,
                    })
                }
                other => other?,
            };
            Command::Edit { id, description }
        }
        "show" | "tasks" => {
            let raw = args.first().ok_or(ParseError::MissingArgument {
                command: "show",
                usage: "show all|open|incomplete|started|complete|<id>",
            })?;
            Command::Show(listing(raw)?)
        }
        "start" => Command::Start(id_arg(&args, "start")?),
        "complete" | "done" => Command::Complete(id_arg(&args, "complete")?),
        "undo" => Command::Undo(id_arg(&args, "undo")?),
        "delete" | "remove" => Command::Delete(id_arg(&args, "delete")?),
        "exit" | "close" | "quit" => Command::Exit,
        _ => return Err(ParseError::UnknownCommand(line.trim().to_string())),
    };
    Ok(Some(command))
}

fn listing(raw: &str) -> Result<Listing, ParseError> {
    let listing = match raw.to_lowercase().as_str() {
        "all" => Listing::All,
        "open" => Listing::Open,
        "incomplete" => Listing::Status(TaskStatus::Incomplete),
        "started" => Listing::Status(TaskStatus::InProgress),
        "complete" | "completed" | "done" => Listing::Status(TaskStatus::Complete),
        _ => Listing::One(parse_id(raw)?),
    };
    Ok(listing)
}

fn id_arg(args: &[&str], command: &'static str) -> Result<TaskId, ParseError> {
    let usage = match command {
        "start" => "start <id>",
        "complete" => "complete <id>",
        "undo" => "undo <id>",
        _ => "delete <id>",
    };
    let raw = args
        .first()
        .ok_or(ParseError::MissingArgument { command, usage })?;
    parse_id(raw)
}

fn parse_id(raw: &str) -> Result<TaskId, ParseError> {
    raw.parse()
        .map_err(|_| ParseError::InvalidId(raw.to_string()))
}

/// Joins the non-flag words with single spaces.
fn description(args: &[&str]) -> Result<String, ParseError> {
    let words: Vec<&str> = args
        .iter()
        .copied()
        .filter(|w| !w.starts_with("--"))
        .collect();
    if words.is_empty() {
        return Err(ParseError::EmptyDescription);
    }
    Ok(words.join(" "))
}
