use crate::core::common::error::OxirowError;
use std::error::Error; // Import the Error trait
use std::io;

#[test]
fn test_error_display_and_source() {
    // Test Io variant
    let io_err = OxirowError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
    assert_eq!(format!("{}", io_err), "IO Error: file not found");
    assert!(io_err.source().is_some());

    // Test Json variant
    let serde_err = serde_json::from_str::<serde_json::Value>("{\"key\":").unwrap_err();
    let json_err = OxirowError::Json(serde_err);
    assert!(format!("{}", json_err).contains("JSON Serialization/Deserialization Error"));
    assert!(json_err.source().is_some());

    let invalid = OxirowError::InvalidArgument("Fields cannot be null.".to_string());
    assert_eq!(format!("{}", invalid), "Invalid argument: Fields cannot be null.");
    assert!(invalid.source().is_none());

    let config_err = OxirowError::Configuration("bad level".to_string());
    assert_eq!(format!("{}", config_err), "Configuration error: bad level");
    assert!(config_err.source().is_none());

    let logging_err = OxirowError::Logging("already set".to_string());
    assert_eq!(format!("{}", logging_err), "Logging error: already set");
}

#[test]
fn test_from_std_io_error() {
    let std_io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
    let err: OxirowError = std_io_err.into();
    match err {
        OxirowError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
        _ => panic!("Expected OxirowError::Io variant"),
    }
}

#[test]
fn test_from_serde_json_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("[1, 2").unwrap_err();
    let original_kind = serde_err.classify();

    let err: OxirowError = serde_err.into();
    match err {
        OxirowError::Json(e) => assert_eq!(e.classify(), original_kind),
        _ => panic!("Expected OxirowError::Json variant"),
    }
}

#[test]
fn test_invalid_argument_helpers() {
    let err = OxirowError::invalid_argument("missing");
    assert!(err.is_invalid_argument());
    assert!(!OxirowError::Configuration("x".to_string()).is_invalid_argument());
}
