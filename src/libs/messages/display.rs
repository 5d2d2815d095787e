//! Rendering of [`Message`] variants into terminal text.
//!
//! All user-facing wording lives here, in one match, so the tone stays
//! consistent and a future localization pass has a single file to touch.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded { description, priority } => {
                format!("to-do: \"{}\" was added with priority {}", description, priority)
            }
            Message::TaskCompleted(description) => format!("to-do: \"{}\" was completed", description),
            Message::TaskRemoved(description) => format!("to-do: \"{}\" was removed", description),
            Message::TasksCleared => "All to-dos were removed".to_string(),
            Message::TodosNotFound => "There are no tasks in the to-do list yet".to_string(),
            Message::TodoListHeader => "to-do list:".to_string(),
            Message::ConfirmRemoveTask(description) => format!("Remove to-do \"{}\"?", description),
            Message::ConfirmClearTasks => "Delete every to-do in the database?".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === OUTCOME MESSAGES ===
            Message::TaskAddFailed(outcome) => format!("Adding to-do failed with \"{}\"", outcome),
            Message::TaskCompleteFailed(outcome) => format!("Completing to-do failed with \"{}\"", outcome),
            Message::TaskRemoveFailed(outcome) => format!("Removing to-do failed with \"{}\"", outcome),
            Message::TasksClearFailed(outcome) => format!("Clearing to-dos failed with \"{}\"", outcome),
            Message::TaskListFailed(outcome) => format!("Reading the to-do list failed with \"{}\"", outcome),

            // === DATABASE MESSAGES ===
            Message::DbInitialized(path) => format!("The to-do database is \"{}\"", path),
            Message::DbInitFailed(outcome) => format!("Initializing the to-do database failed with \"{}\"", outcome),

            // === CONFIGURATION MESSAGES ===
            Message::PromptDbLocation => "to-do database location?".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found, run \"todocli init\" first".to_string(),
            Message::ConfigReadFailed => "Failed to read the configuration file".to_string(),
            Message::ConfigSaveFailed(outcome) => format!("Creating the configuration file failed with \"{}\"", outcome),
            Message::DataStoragePathError(outcome) => format!("Failed to prepare the application data directory: {}", outcome),
        };
        write!(f, "{}", text)
    }
}
