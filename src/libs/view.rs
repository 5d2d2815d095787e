use super::todo::Todo;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the task collection as a table. The ID column shows each
    /// task's current 1-based position, which is exactly the value the
    /// `complete` and `remove` commands accept.
    pub fn todos(todos: &[Todo]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DESCRIPTION", "PRIORITY", "DUE", "DONE"]);
        for (index, todo) in todos.iter().enumerate() {
            table.add_row(row![
                index + 1,
                todo.description,
                todo.priority,
                todo.due.map(|due| due.to_string()).unwrap_or_else(|| "-".to_string()),
                if todo.done { "✓" } else { "" }
            ]);
        }
        table.printstd();
    }
}
