use crate::db::todos::Todos;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    force: bool,
}

pub fn cmd(clear_args: ClearArgs) -> Result<()> {
    let todos = Todos::new()?;

    if !clear_args.force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearTasks.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_warning!(Message::OperationCancelled);
            return Ok(());
        }
    }

    todos
        .remove_all()
        .map_err(|e| msg_error_anyhow!(Message::TasksClearFailed(e.to_string())))?;

    msg_success!(Message::TasksCleared);
    Ok(())
}
