use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_port_below_1024_when_validate_then_error() {
    // Given
    let _env = setup_config_dir().with_compose_file();
    let _port = EnvGuard::set("GS_SERVER_PORT", "80");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok() {
    // Given - port 0 means OS auto-assign
    let _env = setup_config_dir().with_compose_file();
    let _port = EnvGuard::set("GS_SERVER_PORT", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_zero_keep_alive_when_validate_then_error() {
    // Given
    let _env = setup_config_dir().with_compose_file();
    let _keep_alive = EnvGuard::set("GS_SSE_KEEP_ALIVE_SECS", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_defaults_when_bind_addr_then_all_interfaces() {
    // Given
    let _env = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}
