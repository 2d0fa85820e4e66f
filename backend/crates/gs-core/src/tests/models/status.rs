use crate::Status;

use std::str::FromStr;

#[test]
fn test_status_as_str() {
    assert_eq!(Status::Inactive.as_str(), "inactive");
    assert_eq!(Status::Starting.as_str(), "starting");
    assert_eq!(Status::Healthy.as_str(), "healthy");
    assert_eq!(Status::Failed.as_str(), "failed");
}

#[test]
fn test_status_from_str() {
    assert_eq!(Status::from_str("inactive").unwrap(), Status::Inactive);
    assert_eq!(Status::from_str("starting").unwrap(), Status::Starting);
    assert_eq!(Status::from_str("healthy").unwrap(), Status::Healthy);
    assert_eq!(Status::from_str("failed").unwrap(), Status::Failed);
    assert!(Status::from_str("unhealthy").is_err());
}

#[test]
fn test_status_from_str_tolerates_case_and_whitespace() {
    assert_eq!(Status::from_str(" Healthy\n").unwrap(), Status::Healthy);
}

#[test]
fn test_status_default_is_inactive() {
    assert_eq!(Status::default(), Status::Inactive);
}

#[test]
fn test_status_is_running() {
    assert!(Status::Starting.is_running());
    assert!(Status::Healthy.is_running());
    assert!(!Status::Inactive.is_running());
    assert!(!Status::Failed.is_running());
}

#[test]
fn test_status_serializes_as_token() {
    let json = serde_json::to_string(&Status::Healthy).unwrap();
    assert_eq!(json, "\"healthy\"");
}
