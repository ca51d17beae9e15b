use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("RD_DATABASE_PATH", "/tmp/rolldice.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_parent_traversal_in_database_path_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("RD_DATABASE_PATH", "../rolldice.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_nested_relative_database_path_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("RD_DATABASE_PATH", "data/rolldice.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_zero_max_connections_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _max = EnvGuard::set("RD_DATABASE_MAX_CONNECTIONS", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_connections_over_limit_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _max = EnvGuard::set("RD_DATABASE_MAX_CONNECTIONS", "65");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
