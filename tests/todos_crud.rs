#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use todocli::db::todos::Todos;
    use todocli::libs::error::TodoError;
    use todocli::libs::todo::Todo;

    /// Creates a manager over a freshly initialized (empty) database, the
    /// state `todocli init` leaves behind.
    fn todo_manager(temp_dir: &TempDir) -> Todos {
        let db_path = temp_dir.path().join("todo.json");
        std::fs::write(&db_path, "[]").unwrap();
        Todos::with_path(db_path)
    }

    fn due(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    #[test]
    fn test_add_returns_new_task() {
        let temp_dir = TempDir::new().unwrap();
        let todos = todo_manager(&temp_dir);

        let todo = todos.add("Buy milk", 2, due(2025, 1, 1)).unwrap();
        assert_eq!(todo, Todo {
            description: "Buy milk".to_string(),
            priority: 2,
            due: due(2025, 1, 1),
            done: false,
        });
    }

    #[test]
    fn test_add_without_due_date() {
        let temp_dir = TempDir::new().unwrap();
        let todos = todo_manager(&temp_dir);

        let todo = todos.add("Water the plants", 1, None).unwrap();
        assert_eq!(todo.due, None);
        assert!(!todo.done);
    }

    #[test]
    fn test_add_appends_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let todos = todo_manager(&temp_dir);

        for i in 1..=5 {
            todos.add(&format!("Task {}", i), 2, None).unwrap();
        }

        let list = todos.read_todos().unwrap();
        assert_eq!(list.len(), 5);
        for (index, todo) in list.iter().enumerate() {
            assert_eq!(todo.description, format!("Task {}", index + 1));
        }
    }

    #[test]
    fn test_add_persists_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let todos = todo_manager(&temp_dir);

        todos.add("Buy milk", 3, due(2025, 6, 15)).unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("todo.json")).unwrap();
        let saved: Vec<Todo> = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved, vec![Todo::new("Buy milk", 3, due(2025, 6, 15))]);
    }

    #[test]
    fn test_add_on_missing_database_is_db_read_error() {
        let temp_dir = TempDir::new().unwrap();
        // No init: the manager never creates the database file itself.
        let todos = Todos::with_path(temp_dir.path().join("todo.json"));

        let err = todos.add("Buy milk", 2, None).unwrap_err();
        assert!(matches!(err, TodoError::DbRead(_)));
    }

    #[test]
    fn test_set_done_marks_only_target() {
        let temp_dir = TempDir::new().unwrap();
        let todos = todo_manager(&temp_dir);
        for i in 1..=3 {
            todos.add(&format!("Task {}", i), 2, None).unwrap();
        }

        let todo = todos.set_done(2).unwrap();
        assert!(todo.done);
        assert_eq!(todo.description, "Task 2");

        let list = todos.read_todos().unwrap();
        assert_eq!(list.iter().map(|t| t.done).collect::<Vec<_>>(), vec![false, true, false]);
    }

    #[test]
    fn test_set_done_out_of_range_is_id_error() {
        let temp_dir = TempDir::new().unwrap();
        let todos = todo_manager(&temp_dir);

        assert!(matches!(todos.set_done(1).unwrap_err(), TodoError::Id(1)));

        todos.add("Task 1", 2, None).unwrap();
        assert!(matches!(todos.set_done(0).unwrap_err(), TodoError::Id(0)));
        assert!(matches!(todos.set_done(2).unwrap_err(), TodoError::Id(2)));
    }

    #[test]
    fn test_remove_returns_removed_record() {
        let temp_dir = TempDir::new().unwrap();
        let todos = todo_manager(&temp_dir);
        todos.add("Buy milk", 2, due(2025, 1, 1)).unwrap();

        let removed = todos.remove(1).unwrap();
        assert_eq!(removed, Todo::new("Buy milk", 2, due(2025, 1, 1)));
        assert!(todos.read_todos().unwrap().is_empty());
    }

    #[test]
    fn test_remove_shifts_later_ids_down() {
        let temp_dir = TempDir::new().unwrap();
        let todos = todo_manager(&temp_dir);
        for i in 1..=3 {
            todos.add(&format!("Task {}", i), 2, None).unwrap();
        }

        todos.remove(2).unwrap();

        let list = todos.read_todos().unwrap();
        assert_eq!(
            list.iter().map(|t| t.description.as_str()).collect::<Vec<_>>(),
            vec!["Task 1", "Task 3"]
        );

        // "Task 3" is now addressable as ID 2.
        let todo = todos.set_done(2).unwrap();
        assert_eq!(todo.description, "Task 3");
    }

    #[test]
    fn test_id_error_leaves_database_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let todos = todo_manager(&temp_dir);
        todos.add("Task 1", 2, None).unwrap();
        let before = std::fs::read_to_string(temp_dir.path().join("todo.json")).unwrap();

        assert!(todos.remove(7).is_err());
        assert!(todos.set_done(0).is_err());

        let after = std::fs::read_to_string(temp_dir.path().join("todo.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_all_empties_collection() {
        let temp_dir = TempDir::new().unwrap();
        let todos = todo_manager(&temp_dir);
        for i in 1..=10 {
            todos.add(&format!("Task {}", i), 2, None).unwrap();
        }

        todos.remove_all().unwrap();
        assert!(todos.read_todos().unwrap().is_empty());
    }

    #[test]
    fn test_remove_all_on_empty_collection() {
        let temp_dir = TempDir::new().unwrap();
        let todos = todo_manager(&temp_dir);

        todos.remove_all().unwrap();
        assert!(todos.read_todos().unwrap().is_empty());
    }

    #[test]
    fn test_read_todos_reflects_external_changes() {
        let temp_dir = TempDir::new().unwrap();
        let todos = todo_manager(&temp_dir);
        todos.add("Task 1", 2, None).unwrap();

        // Nothing is cached between calls: edits made behind the manager's
        // back are visible on the next read.
        let external = vec![Todo::new("Edited externally", 1, None)];
        std::fs::write(
            temp_dir.path().join("todo.json"),
            serde_json::to_string_pretty(&external).unwrap(),
        )
        .unwrap();

        assert_eq!(todos.read_todos().unwrap(), external);
    }

    #[test]
    fn test_corrupt_database_is_parse_error_not_empty() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("todo.json");
        std::fs::write(&db_path, "[{\"description\":").unwrap();
        let todos = Todos::with_path(&db_path);

        let err = todos.read_todos().unwrap_err();
        assert!(matches!(err, TodoError::Json(_)));
    }

    #[test]
    fn test_mutation_on_unreadable_path_never_writes() {
        let temp_dir = TempDir::new().unwrap();
        // The path is a directory: the read stage fails, so the pipeline
        // stops before any write is attempted.
        let todos = Todos::with_path(temp_dir.path());

        let err = todos.add("Buy milk", 2, None).unwrap_err();
        assert!(matches!(err, TodoError::DbRead(_)));

        let err = todos.remove_all().unwrap_err();
        assert!(matches!(err, TodoError::DbWrite(_)));
    }

    #[test]
    fn test_full_lifecycle() {
        let temp_dir = TempDir::new().unwrap();
        let todos = todo_manager(&temp_dir);

        let added = todos.add("Buy milk", 2, due(2025, 1, 1)).unwrap();
        assert_eq!(added, Todo::new("Buy milk", 2, due(2025, 1, 1)));

        let completed = todos.set_done(1).unwrap();
        assert!(completed.done);
        assert_eq!(completed.description, added.description);

        let removed = todos.remove(1).unwrap();
        assert!(removed.done);
        assert_eq!(removed.description, "Buy milk");

        assert!(todos.read_todos().unwrap().is_empty());
    }
}
