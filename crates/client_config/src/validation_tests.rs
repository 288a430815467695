use super::*;

#[test]
fn test_validate_endpoint() {
    assert!(validate_endpoint("pubsub.googleapis.com").is_ok());
    assert!(validate_endpoint("localhost:8080").is_ok());
    assert!(validate_endpoint("").is_err());
    assert!(validate_endpoint("https://pubsub.googleapis.com").is_err());
    assert!(validate_endpoint("local host").is_err());
}

#[test]
fn test_validate_timeout() {
    assert!(validate_timeout(0.5).is_ok());
    assert!(validate_timeout(60.0).is_ok());
    assert!(validate_timeout(0.0).is_err());
    assert!(validate_timeout(-1.0).is_err());
    assert!(validate_timeout(f64::NAN).is_err());
    assert!(validate_timeout(f64::INFINITY).is_err());
}

#[test]
fn test_validate_lib_name() {
    assert!(validate_lib_name("hi").is_ok());
    assert!(validate_lib_name("gccl-rust_2").is_ok());
    assert!(validate_lib_name("hello world").is_err());
    assert!(validate_lib_name("Hi").is_err());
    assert!(validate_lib_name("hi!").is_err());
    assert!(validate_lib_name("").is_err());
}

#[test]
fn test_validate_lib_version() {
    assert!(validate_lib_version("1.2.3").is_ok());
    assert!(validate_lib_version("").is_err());
    assert!(validate_lib_version("1 2").is_err());
}

#[test]
fn test_validate_quota_project() {
    assert!(validate_quota_project("billing-project").is_ok());
    assert!(validate_quota_project("  ").is_err());
}

#[test]
fn test_validation_error_names_field() {
    let err = validate_timeout(0.0).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "timeout"));
}

#[test]
fn test_lib_name_regex_is_compiled_once() {
    let first: *const Regex = &*LIB_NAME_REGEX;
    assert!(validate_lib_name("hi").is_ok());
    assert!(validate_lib_name("Hi").is_err());
    assert!(std::ptr::eq(first, &*LIB_NAME_REGEX));
    assert_eq!(LIB_NAME_REGEX.as_str(), LIB_NAME_PATTERN);
}
