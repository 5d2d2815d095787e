//! Task manager built on top of the flat-file store.
//!
//! Owns the read-modify-write orchestration for every mutating operation and
//! the resolution of 1-based task IDs. IDs are positions, not stable keys:
//! removing task N renumbers every task after it. Nothing is cached between
//! calls — each operation re-reads the database file, so the file is always
//! the single source of truth even when it is edited externally.

use super::store::TodoStore;
use crate::libs::config::Config;
use crate::libs::error::TodoError;
use crate::libs::todo::Todo;
use crate::msg_debug;
use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct Todos {
    store: TodoStore,
}

impl Todos {
    /// Opens the task manager on the database configured via `todocli init`.
    pub fn new() -> Result<Self> {
        let config = Config::read()?;
        msg_debug!(format!("Using to-do database at {}", config.database.display()));
        Ok(Self::with_path(config.database))
    }

    /// Opens the task manager on an explicit database file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Todos {
            store: TodoStore::new(path),
        }
    }

    /// Shared pipeline for every mutating operation: read the collection,
    /// apply `mutate` in memory, write the result back. The first failing
    /// stage short-circuits, so a failed call never persists a partial
    /// mutation and an out-of-range ID never touches the file.
    fn update<T>(&self, mutate: impl FnOnce(&mut Vec<Todo>) -> Result<T, TodoError>) -> Result<T, TodoError> {
        let mut todos = self.store.read_all()?;
        let value = mutate(&mut todos)?;
        self.store.write_all(&todos)?;
        Ok(value)
    }

    /// Resolves a 1-based task ID against the current collection length.
    fn index(id: usize, len: usize) -> Result<usize, TodoError> {
        id.checked_sub(1).filter(|&index| index < len).ok_or(TodoError::Id(id))
    }

    /// Appends a new task. Its resulting ID is the previous count plus one.
    pub fn add(&self, description: &str, priority: u8, due: Option<NaiveDate>) -> Result<Todo, TodoError> {
        self.update(|todos| {
            let todo = Todo::new(description, priority, due);
            todos.push(todo.clone());
            Ok(todo)
        })
    }

    /// Marks the task at 1-based `id` as done and returns the updated record.
    pub fn set_done(&self, id: usize) -> Result<Todo, TodoError> {
        self.update(|todos| {
            let index = Self::index(id, todos.len())?;
            todos[index].done = true;
            Ok(todos[index].clone())
        })
    }

    /// Removes the task at 1-based `id` and returns the removed record.
    /// Every task after it shifts down by one position.
    pub fn remove(&self, id: usize) -> Result<Todo, TodoError> {
        self.update(|todos| {
            let index = Self::index(id, todos.len())?;
            Ok(todos.remove(index))
        })
    }

    /// Replaces the whole collection with an empty one. Unconditional, so no
    /// read step is needed and a corrupt database can still be cleared.
    pub fn remove_all(&self) -> Result<(), TodoError> {
        self.store.write_all(&[])
    }

    /// Returns the current task collection.
    pub fn read_todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.store.read_all()
    }
}
