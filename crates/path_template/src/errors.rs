//! Path template error types.
//!
//! Each operation on a template fails with its own error family so callers
//! can tell a malformed template apart from a path that simply does not fit
//! it, or from an instantiation that lacks a value.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised while turning template text into a [`crate::PathTemplate`].
///
/// Positions are byte offsets into the original template string, including
/// any leading `/`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The template contained no segments.
    ///
    /// Returned for `""` and for a template that is only a leading `/`.
    #[error("Invalid path template: template is empty")]
    EmptyTemplate,

    /// A character outside the literal set was found.
    ///
    /// Literals may contain ASCII letters and digits, `- . ~ _ :` and percent
    /// escapes. Anything else, including whitespace, is rejected here.
    #[error("Invalid path template: illegal character '{character}' at position {position}")]
    IllegalCharacter { character: char, position: usize },

    /// A `%` was not followed by two hexadecimal digits.
    #[error("Invalid path template: malformed percent escape at position {position}")]
    MalformedEscape { position: usize },

    /// The grammar expected something else at this point.
    ///
    /// Returned for misplaced tokens such as the empty segment in `a//b`,
    /// a stray `=` or `}`, or a binding that does not start with a name.
    #[error("Invalid path template: expected {expected} but found {found} at position {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
    },

    /// Input ended while the grammar still expected more.
    #[error("Invalid path template: unexpected end of template, expected {expected}")]
    UnexpectedEnd { expected: String },

    /// A `{` was opened but never closed.
    ///
    /// Returned when the template ends inside a binding, e.g. `a/{b=*`.
    #[error("Invalid path template: unterminated binding '{name}'")]
    UnterminatedBinding { name: String },

    /// A binding appeared inside another binding's sub-path.
    #[error("Invalid path template: nested binding inside '{name}'")]
    NestedBinding { name: String },

    /// The same binding name was used twice.
    ///
    /// Positional names count too, so `*/{$0=x}` is rejected because the
    /// unnamed wildcard is already `$0`.
    #[error("Invalid path template: duplicate binding name '{name}'")]
    DuplicateBinding { name: String },

    /// A binding name is not a field-path style identifier.
    #[error("Invalid path template: invalid binding name '{name}'")]
    InvalidBindingName { name: String },

    /// A literal segment contains a character reserved for binding names.
    #[error("Invalid path template: invalid literal segment '{literal}'")]
    InvalidLiteral { literal: String },

    /// More than one `**` appeared in the flattened template.
    ///
    /// Only one component range can have a variable width, so a second `**`
    /// is rejected whether or not either one sits inside a binding.
    #[error("Invalid path template: multiple unbound wildcards")]
    MultipleUnboundWildcards,
}

/// Errors raised when a path does not fit a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The template has no `**` and the path has the wrong number of components.
    ///
    /// Without a `**` every atom consumes exactly one component, so the
    /// counts must be equal.
    #[error("Path does not match template: component count mismatch (expected {expected}, found {actual})")]
    ComponentCountMismatch { expected: usize, actual: usize },

    /// The path cannot supply one component per fixed atom.
    ///
    /// Returned for templates with a `**` when the path is shorter than the
    /// atoms around it.
    #[error("Path does not match template: too few components (need at least {minimum}, found {actual})")]
    TooFewComponents { minimum: usize, actual: usize },

    /// A literal atom was compared against a different component.
    #[error("Path does not match template: literal mismatch at component {position} (expected '{expected}', found '{actual}')")]
    LiteralMismatch {
        expected: String,
        actual: String,
        position: usize,
    },

    /// A wildcard was asked to match only empty components.
    ///
    /// A `*` never matches an empty component. A `**` matches either no
    /// components or a run with at least one non-empty component, so
    /// `a//b` does not match `a/**/b`.
    #[error("Path does not match template: empty component at position {position}")]
    EmptyComponent { position: usize },
}

/// Raised when `instantiate` lacks a value for a binding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing value for binding '{name}'")]
pub struct MissingBindingError {
    /// The explicit or positional binding name that had no value.
    pub name: String,
}

/// Any error raised by this crate.
///
/// Useful for callers that parse, match and instantiate in one flow and
/// only want a single error type to propagate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    MissingBinding(#[from] MissingBindingError),
}

/// Result type alias for path template operations.
pub type PathTemplateResult<T> = Result<T, Error>;
