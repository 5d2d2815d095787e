use crate::db::todos::Todos;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let todos = Todos::new()?;
    let list = todos
        .read_todos()
        .map_err(|e| msg_error_anyhow!(Message::TaskListFailed(e.to_string())))?;

    if list.is_empty() {
        msg_info!(Message::TodosNotFound);
        return Ok(());
    }

    msg_print!(Message::TodoListHeader, true);
    View::todos(&list);
    Ok(())
}
