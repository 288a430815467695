use thiserror::Error;

use client_config::ConfigError;
use path_template::{MatchError, MissingBindingError, ParseError};

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the path template CLI.
///
/// This enum represents every failure a subcommand can report, from bad
/// template text and non-matching paths to unreadable configuration files.
#[derive(Error, Debug)]
pub enum Error {
    /// The template argument could not be parsed.
    ///
    /// This error is returned by every template subcommand when the template
    /// text is malformed, such as an unterminated binding or a second `**`.
    #[error("Template error: {0}")]
    Template(#[from] ParseError),

    /// The path argument does not match the template.
    ///
    /// This error is returned by `match` when the path has the wrong number
    /// of components, a literal differs, or a wildcard meets an empty component.
    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    /// `instantiate` was not given every binding the template needs.
    ///
    /// This error is returned when a binding containing a wildcard has no
    /// `NAME=VALUE` argument.
    #[error("Instantiation error: {0}")]
    MissingBinding(#[from] MissingBindingError),

    /// A configuration file was unreadable or invalid.
    ///
    /// This error is returned by `config` when a file cannot be read, is not
    /// valid TOML, or holds a value that fails validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments were provided.
    ///
    /// This error is returned when arguments are individually valid but
    /// cannot be combined, such as the same binding given twice.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Output could not be formatted.
    ///
    /// This error is returned when match results or the resolved
    /// configuration cannot be serialized as JSON or TOML.
    #[error("Failed to format output: {0}")]
    Output(String),
}
