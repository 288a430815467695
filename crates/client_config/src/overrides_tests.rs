use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_from_toml_str_reads_all_fields() {
    let overrides = ConfigOverrides::from_toml_str(
        r#"
endpoint = "pubsub.googleapis.com"
timeout = 30.0
retry = false
transport = "rest"
lib_name = "gccl"
lib_version = "1.2.3"
quota_project = "billing"
"#,
    )
    .unwrap();

    assert_eq!(overrides.endpoint.as_deref(), Some("pubsub.googleapis.com"));
    assert_eq!(overrides.timeout, Some(30.0));
    assert_eq!(overrides.retry, Some(false));
    assert_eq!(overrides.transport.as_deref(), Some("rest"));
    assert_eq!(overrides.lib_name.as_deref(), Some("gccl"));
    assert_eq!(overrides.lib_version.as_deref(), Some("1.2.3"));
    assert_eq!(overrides.quota_project.as_deref(), Some("billing"));
}

#[test]
fn test_from_toml_str_empty_is_all_inherited() {
    assert_eq!(
        ConfigOverrides::from_toml_str("").unwrap(),
        ConfigOverrides::default()
    );
}

#[test]
fn test_from_toml_str_rejects_unknown_keys() {
    let err = ConfigOverrides::from_toml_str("colour = \"blue\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_from_toml_str_rejects_wrong_types() {
    let err = ConfigOverrides::from_toml_str("retry = \"yes\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "timeout = 12.5").unwrap();

    let overrides = ConfigOverrides::from_file(file.path()).unwrap();
    assert_eq!(overrides.timeout, Some(12.5));
}

#[test]
fn test_from_missing_file() {
    let err = ConfigOverrides::from_file(Path::new("/nonexistent/client.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { ref path, .. } if path == "/nonexistent/client.toml"));
}
