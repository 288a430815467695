//! Resource-name path templates.
//!
//! This crate parses URI-like templates such as `buckets/*/objects/**` or
//! `projects/{project}/topics/{topic}`, matches concrete paths against them,
//! instantiates paths from binding values, and renders templates back to a
//! canonical string form.
//!
//! Grammar summary:
//! - `literal` matches one component exactly
//! - `*` matches one non-empty component
//! - `**` matches zero or more components (at most one per template)
//! - `{name}` or `{name=sub/path}` binds the components matched by its
//!   sub-path to `name`
//!
//! Wildcards outside a binding are named positionally `$0`, `$1`, ... in
//! left-to-right order. No percent-decoding is performed anywhere: `%2F` in
//! a path is ordinary text.

mod atom;
mod errors;
mod lexer;
mod matcher;
mod parser;
mod render;
mod template;

pub use atom::{Atom, AtomKind};
pub use errors::{Error, MatchError, MissingBindingError, ParseError, PathTemplateResult};
pub use matcher::Bindings;
pub use template::PathTemplate;
