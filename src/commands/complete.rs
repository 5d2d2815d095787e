use crate::db::todos::Todos;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// 1-based ID of the task, as shown by `todocli list`
    #[arg(required = true)]
    todo_id: usize,
}

pub fn cmd(complete_args: CompleteArgs) -> Result<()> {
    let todos = Todos::new()?;
    let todo = todos
        .set_done(complete_args.todo_id)
        .map_err(|e| msg_error_anyhow!(Message::TaskCompleteFailed(e.to_string())))?;

    msg_success!(Message::TaskCompleted(todo.description));
    Ok(())
}
