//! # Todocli
//!
//! A command-line to-do tracker that keeps its tasks in a plain,
//! human-readable JSON file.
//!
//! ## Features
//!
//! - **Task Management**: Add tasks with a priority and an optional due date,
//!   mark them complete, remove them one by one or all at once
//! - **Positional IDs**: Tasks are addressed by their 1-based position in the
//!   list; removing a task shifts every later ID down by one
//! - **Plain Storage**: The whole database is a single pretty-printed JSON
//!   array, trivially inspectable and editable by hand
//! - **Structured Outcomes**: Every storage operation reports a typed outcome
//!   instead of panicking, so the CLI can always print a deterministic message
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todocli::commands::Cli;
//!
//! fn main() {
//!     if let Err(err) = Cli::menu() {
//!         todocli::msg_error!(err);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
