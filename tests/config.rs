#[cfg(test)]
mod tests {
    use serial_test::serial;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todocli::commands::init::init_db;
    use todocli::db::store::TodoStore;
    use todocli::libs::config::Config;
    use todocli::libs::todo::Todo;

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata
    /// directory, so no test ever touches a real configuration.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_read_missing_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let err = Config::read().unwrap_err();
        assert!(err.to_string().contains("todocli init"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            database: PathBuf::from("/tmp/todo.json"),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_default_db_path_is_inside_app_dir(_ctx: &mut ConfigTestContext) {
        let path = Config::default_db_path().unwrap();
        assert!(path.ends_with("todocli/todo.json"), "unexpected path: {}", path.display());
    }

    #[test]
    fn test_init_db_seeds_empty_collection() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("todo.json");

        init_db(&db_path).unwrap();

        let todos = TodoStore::new(&db_path).read_all().unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn test_init_db_keeps_existing_database() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("todo.json");
        let store = TodoStore::new(&db_path);
        store.write_all(&[Todo::new("Buy milk", 2, None)]).unwrap();

        init_db(&db_path).unwrap();

        let todos = store.read_all().unwrap();
        assert_eq!(todos, vec![Todo::new("Buy milk", 2, None)]);
    }

    #[test]
    fn test_init_db_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("no-such-dir").join("todo.json");

        let err = init_db(&db_path).unwrap_err();
        assert!(err.to_string().contains("Initializing the to-do database failed"));
    }
}
