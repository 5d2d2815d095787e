use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single to-do item as it is persisted in the database file.
///
/// The on-disk representation is a JSON object with exactly these four
/// fields; `due` serializes to a `"YYYY-MM-DD"` string or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub description: String,
    pub priority: u8,
    pub due: Option<NaiveDate>,
    pub done: bool,
}

impl Todo {
    /// Creates a fresh task. New tasks always start out not done.
    pub fn new(description: &str, priority: u8, due: Option<NaiveDate>) -> Self {
        Todo {
            description: description.to_string(),
            priority,
            due,
            done: false,
        }
    }
}
