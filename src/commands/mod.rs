//! Command-line interface definition and dispatch.
//!
//! Each subcommand lives in its own module with a clap `Args` struct and a
//! `cmd` function returning `anyhow::Result<()>`. A failed command bubbles
//! its error up to `main`, which prints it and exits with a nonzero status;
//! success always exits with 0.

pub mod add;
pub mod clear;
pub mod complete;
pub mod init;
pub mod list;
pub mod remove;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Initialize the to-do database")]
    Init(init::InitArgs),
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "Mark a task as complete")]
    Complete(complete::CompleteArgs),
    #[command(about = "Remove a task by its ID")]
    Remove(remove::RemoveArgs),
    #[command(about = "Remove all tasks")]
    Clear(clear::ClearArgs),
    #[command(about = "List all tasks in a table")]
    List,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        // Route the message macros into structured logs when debug mode is
        // requested; otherwise they print straight to the terminal.
        if crate::libs::messages::macros::is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Complete(args) => complete::cmd(args),
            Commands::Remove(args) => remove::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
            Commands::List => list::cmd(),
        }
    }
}
