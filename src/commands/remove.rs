//! Task removal command.
//!
//! Removal renumbers every later task, so unless `--force` is given the
//! command shows the task it is about to delete and asks for confirmation.

use crate::db::todos::Todos;
use crate::libs::error::TodoError;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// 1-based ID of the task, as shown by `todocli list`
    #[arg(required = true)]
    todo_id: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    force: bool,
}

pub fn cmd(remove_args: RemoveArgs) -> Result<()> {
    let todos = Todos::new()?;

    if !remove_args.force {
        let list = todos
            .read_todos()
            .map_err(|e| msg_error_anyhow!(Message::TaskRemoveFailed(e.to_string())))?;
        let target = match remove_args.todo_id.checked_sub(1).and_then(|index| list.get(index)) {
            Some(todo) => todo,
            None => msg_bail_anyhow!(Message::TaskRemoveFailed(TodoError::Id(remove_args.todo_id).to_string())),
        };

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmRemoveTask(target.description.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_warning!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let todo = todos
        .remove(remove_args.todo_id)
        .map_err(|e| msg_error_anyhow!(Message::TaskRemoveFailed(e.to_string())))?;

    msg_success!(Message::TaskRemoved(todo.description));
    Ok(())
}
