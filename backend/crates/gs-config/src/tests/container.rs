use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_compose_file_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().to_string().contains("compose_file"));
}

#[test]
#[serial]
fn given_nonexistent_compose_file_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _compose = EnvGuard::set("GS_COMPOSE_FILE", "/definitely/not/here/compose.yaml");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_compose_path_is_directory_when_validate_then_error() {
    // Given
    let env = setup_config_dir();
    let dir = env.dir.path().to_str().unwrap().to_string();
    let _compose = EnvGuard::set("GS_COMPOSE_FILE", &dir);

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_existing_compose_file_when_validate_then_ok() {
    // Given
    let _env = setup_config_dir().with_compose_file();

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_blank_container_name_in_toml_when_validate_then_error() {
    // Given
    let env = setup_config_dir().with_compose_file();
    std::fs::write(
        env.dir.path().join("config.toml"),
        "[container]\nname = \"  \"\n",
    )
    .unwrap();

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
