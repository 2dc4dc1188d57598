//! REPL commands, one module per verb.
//!
//! Each command talks to the store and renders the outcome; store errors are
//! returned untouched so the REPL can decide how to report them.

pub mod add;
pub mod delete;
pub mod edit;
pub mod help;
pub mod show;
pub mod status;
