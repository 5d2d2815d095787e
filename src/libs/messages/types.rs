/// Every user-facing message the application can emit.
///
/// Keeping the full catalog in one enum gives a single place to review the
/// wording and keeps command modules free of string literals. Rendering lives
/// in the `Display` implementation in [`super::display`].
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded { description: String, priority: u8 },
    TaskCompleted(String),
    TaskRemoved(String),
    TasksCleared,
    TodosNotFound,
    TodoListHeader,
    ConfirmRemoveTask(String),
    ConfirmClearTasks,
    OperationCancelled,

    // === OUTCOME MESSAGES ===
    TaskAddFailed(String),
    TaskCompleteFailed(String),
    TaskRemoveFailed(String),
    TasksClearFailed(String),
    TaskListFailed(String),

    // === DATABASE MESSAGES ===
    DbInitialized(String),
    DbInitFailed(String),

    // === CONFIGURATION MESSAGES ===
    PromptDbLocation,
    ConfigFileNotFound,
    ConfigReadFailed,
    ConfigSaveFailed(String),
    DataStoragePathError(String),
}
