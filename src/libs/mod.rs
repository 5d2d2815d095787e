//! Core library modules for the todocli application.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todocli::db::todos::Todos;
//!
//! let todos = Todos::new()?;
//! let todo = todos.add("Buy milk", 2, None)?;
//! # anyhow::Ok(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod todo;
pub mod view;
