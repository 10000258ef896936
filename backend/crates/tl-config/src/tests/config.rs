use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
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
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.broadcast.intake_capacity, eq(100));
    assert_that!(config.broadcast.subscriber_capacity, eq(10));
    assert_that!(config.session.cookie_name.as_str(), eq("timeline-session"));
    assert_that!(config.seed.demo_users, eq(100));
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
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000

            [broadcast]
            intake_capacity = 250
            subscriber_capacity = 4

            [logging]
            level = "debug"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.broadcast.intake_capacity, eq(250));
    assert_that!(config.broadcast.subscriber_capacity, eq(4));
    assert_that!(config.broadcast.cleanup_capacity, eq(100));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

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
    std::fs::write(temp.path().join("config.toml"), "[server]\nport = 9000").unwrap();
    let _port_guard = EnvGuard::set("TL_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _host = EnvGuard::set("TL_SERVER_HOST", "0.0.0.0");
    let _intake = EnvGuard::set("TL_BROADCAST_INTAKE_CAPACITY", "7");
    let _subscriber = EnvGuard::set("TL_BROADCAST_SUBSCRIBER_CAPACITY", "3");
    let _cleanup = EnvGuard::set("TL_BROADCAST_CLEANUP_CAPACITY", "11");
    let _colored = EnvGuard::set("TL_LOG_COLORED", "false");
    let _file = EnvGuard::set("TL_LOG_FILE", "timeline.log");
    let _ttl = EnvGuard::set("TL_SESSION_TTL_SECS", "600");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.host.as_str(), eq("0.0.0.0"));
    assert_that!(config.broadcast.intake_capacity, eq(7));
    assert_that!(config.broadcast.subscriber_capacity, eq(3));
    assert_that!(config.broadcast.cleanup_capacity, eq(11));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), some(eq("timeline.log")));
    assert_that!(config.session.ttl_secs, eq(600));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_keeps_default() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("TL_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
#[serial]
fn given_in_memory_database_when_database_path_then_none() {
    // Given
    let _temp = setup_config_dir();
    let _db = EnvGuard::set("TL_DATABASE_PATH", ":memory:");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.database_path().unwrap(), none());
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_file_database_when_database_path_then_inside_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.database_path().unwrap().unwrap();

    // Then
    assert_eq!(path, temp.path().join("timeline.db"));
}
