//! Value checks run by every configuration setter.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{ConfigError, ConfigResult};

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;

/// Library names as reported in client headers, e.g. `gccl` or `my-lib_2`.
pub const LIB_NAME_PATTERN: &str = r"^[a-z][a-z0-9_-]*$";

static LIB_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(LIB_NAME_PATTERN).expect("LIB_NAME_PATTERN is a valid regex"));

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    }
}

/// Endpoints are `host[:port]` without a scheme.
pub fn validate_endpoint(value: &str) -> ConfigResult<()> {
    if value.is_empty() {
        return Err(invalid("endpoint", "endpoint cannot be empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(invalid("endpoint", format!("'{}' contains whitespace", value)));
    }
    if value.contains("://") {
        return Err(invalid(
            "endpoint",
            format!("'{}' must not include a scheme", value),
        ));
    }
    Ok(())
}

pub fn validate_timeout(value: f64) -> ConfigResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(
            "timeout",
            format!("{} is not a positive number of seconds", value),
        ));
    }
    Ok(())
}

pub fn validate_lib_name(value: &str) -> ConfigResult<()> {
    if !LIB_NAME_REGEX.is_match(value) {
        return Err(invalid(
            "lib_name",
            format!("'{}' does not match pattern {}", value, LIB_NAME_PATTERN),
        ));
    }
    Ok(())
}

pub fn validate_lib_version(value: &str) -> ConfigResult<()> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(invalid(
            "lib_version",
            format!("'{}' must be a non-empty version without whitespace", value),
        ));
    }
    Ok(())
}

pub fn validate_quota_project(value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(invalid("quota_project", "quota project cannot be empty"));
    }
    Ok(())
}
