use crate::db::todos::Todos;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description
    #[arg(required = true)]
    description: String,

    /// Task priority
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=3))]
    priority: u8,

    /// Due date in YYYY-MM-DD form
    #[arg(short, long)]
    due: Option<NaiveDate>,
}

pub fn cmd(add_args: AddArgs) -> Result<()> {
    let todos = Todos::new()?;
    let todo = todos
        .add(&add_args.description, add_args.priority, add_args.due)
        .map_err(|e| msg_error_anyhow!(Message::TaskAddFailed(e.to_string())))?;

    msg_success!(Message::TaskAdded {
        description: todo.description,
        priority: todo.priority,
    });
    Ok(())
}
