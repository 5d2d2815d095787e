//! Database initialization command.
//!
//! Chooses where the to-do database lives, persists that choice in the
//! configuration file, and seeds the database with an empty collection. This
//! is the only place the database file is ever created; every other command
//! expects it to exist already.

use crate::db::store::TodoStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Location of the to-do database file
    #[arg(short = 'd', long = "db-path")]
    db_path: Option<PathBuf>,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    // Fall back to an interactive prompt when no path was given on the
    // command line, suggesting a file inside the application data directory.
    let db_path = match init_args.db_path {
        Some(path) => path,
        None => {
            let default_path = Config::default_db_path()?;
            let answer: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDbLocation.to_string())
                .default(default_path.display().to_string())
                .interact_text()?;
            PathBuf::from(answer)
        }
    };

    let config = Config { database: db_path.clone() };
    config.save().map_err(|e| msg_error_anyhow!(Message::ConfigSaveFailed(e.to_string())))?;

    init_db(&db_path)?;

    msg_success!(Message::DbInitialized(db_path.display().to_string()));
    Ok(())
}

/// Seeds `path` with an empty task collection. An already existing database
/// is left untouched so re-running `init` never loses data.
pub fn init_db(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    TodoStore::new(path)
        .write_all(&[])
        .map_err(|e| msg_error_anyhow!(Message::DbInitFailed(e.to_string())))?;
    Ok(())
}
