use crate::tests::{EnvGuard, setup_config_dir};
use crate::{CONFIG_FILENAME, Config, DEFAULT_PAGE_SIZE, DEFAULT_STORAGE_KEY};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.remote.page_size, eq(DEFAULT_PAGE_SIZE));
    assert_that!(config.storage.key.as_str(), eq(DEFAULT_STORAGE_KEY));
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
    assert!(config.logging.file.is_none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_creates_it() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join(".roster");
    let _guard = EnvGuard::set(crate::CONFIG_DIR_ENV, nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join(CONFIG_FILENAME),
        r#"
              [remote]
              base_url = "http://localhost:9999/api/"
              page_size = 25

              [storage]
              key = "people"

              [logging]
              level = "debug"
              colored = false
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.remote.base_url.as_str(), eq("http://localhost:9999/api/"));
    assert_that!(config.remote.page_size, eq(25));
    assert_that!(config.storage.key.as_str(), eq("people"));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_invalid_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join(CONFIG_FILENAME), "[remote\npage_size = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join(CONFIG_FILENAME),
        "[remote]\npage_size = 30",
    )
    .unwrap();
    let _size = EnvGuard::set("ROSTER_REMOTE_PAGE_SIZE", "5");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.remote.page_size, eq(5));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("ROSTER_REMOTE_BASE_URL", "http://127.0.0.1:1/");
    let _key = EnvGuard::set("ROSTER_STORAGE_KEY", "alt");
    let _dir = EnvGuard::set("ROSTER_STORAGE_DIR", "store");
    let _level = EnvGuard::set("ROSTER_LOG_LEVEL", "warn");
    let _colored = EnvGuard::set("ROSTER_LOG_COLORED", "0");
    let _file = EnvGuard::set("ROSTER_LOG_FILE", "roster.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.remote.base_url.as_str(), eq("http://127.0.0.1:1/"));
    assert_that!(config.storage.key.as_str(), eq("alt"));
    assert_that!(config.storage.dir.as_str(), eq("store"));
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
    assert_that!(config.logging.colored, eq(false));
    assert_eq!(config.logging.file.as_deref(), Some("roster.log"));
}

#[test]
#[serial]
fn given_unparseable_page_size_env_when_load_then_keeps_default() {
    // Given
    let _temp = setup_config_dir();
    let _size = EnvGuard::set("ROSTER_REMOTE_PAGE_SIZE", "lots");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.remote.page_size, eq(DEFAULT_PAGE_SIZE));
}

#[test]
#[serial]
fn given_config_dir_when_storage_path_then_joined_with_storage_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.storage_path().unwrap();

    // Then
    assert_eq!(path, temp.path().join("data"));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_inside_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("ROSTER_LOG_FILE", "roster.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_eq!(path, Some(temp.path().join("log").join("roster.log")));
}

#[test]
#[serial]
fn given_no_env_dir_when_config_dir_then_under_cwd() {
    // Given
    let _guard = EnvGuard::remove(crate::CONFIG_DIR_ENV);

    // When
    let dir = Config::config_dir().unwrap();

    // Then
    assert!(dir.ends_with(crate::DEFAULT_CONFIG_DIRECTORY));
}

#[test]
#[serial]
fn given_log_file_with_path_separator_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("ROSTER_LOG_FILE", "../escape.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
