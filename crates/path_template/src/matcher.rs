//! Matching concrete paths against parsed atoms.
//!
//! At most one atom (`**`) has a variable width, so its span is computed
//! from the component count and every other atom consumes exactly one
//! component. Matching is a single left-to-right pass.

use std::collections::HashMap;
use std::ops::Range;

use tracing::trace;

use crate::atom::{groups, Atom, AtomKind};
use crate::errors::MatchError;

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;

/// Binding name to bound value.
pub type Bindings = HashMap<String, String>;

/// Split a path into components the same way templates are tokenized:
/// one leading `/` is ignored and an empty remainder has no components.
pub(crate) fn split_components(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}

/// Match `path` against `atoms`, returning the value bound to every named
/// group. Values are the matched components joined with `/`, verbatim.
pub fn match_path(atoms: &[Atom], path: &str) -> Result<Bindings, MatchError> {
    let components = split_components(path);
    let spans = assign_spans(atoms, components.len()).inspect_err(|e| {
        trace!(path, error = %e, "Path rejected before component comparison");
    })?;

    for (atom, span) in atoms.iter().zip(&spans) {
        match &atom.kind {
            AtomKind::Literal(expected) => {
                let actual = components[span.start];
                if actual != expected.as_str() {
                    trace!(path, expected = %expected, actual, "Literal mismatch");
                    return Err(MatchError::LiteralMismatch {
                        expected: expected.clone(),
                        actual: actual.to_string(),
                        position: span.start,
                    });
                }
            }
            AtomKind::Wildcard => {
                if components[span.start].is_empty() {
                    trace!(path, position = span.start, "Wildcard cannot match empty component");
                    return Err(MatchError::EmptyComponent {
                        position: span.start,
                    });
                }
            }
            AtomKind::PathWildcard => {
                // Either no components or at least one non-empty one.
                let consumed = &components[span.clone()];
                if !consumed.is_empty() && consumed.iter().all(|c| c.is_empty()) {
                    trace!(path, position = span.start, "Path wildcard cannot match only empty components");
                    return Err(MatchError::EmptyComponent {
                        position: span.start,
                    });
                }
            }
        }
    }

    let bindings = groups(atoms)
        .into_iter()
        .filter_map(|group| {
            let name = group.name?;
            // Consecutive spans are contiguous, so the group covers one range.
            let start = spans[group.range.start].start;
            let end = spans[group.range.end - 1].end;
            Some((name.to_string(), components[start..end].join("/")))
        })
        .collect();

    Ok(bindings)
}

/// Work out which component range each atom consumes.
fn assign_spans(atoms: &[Atom], count: usize) -> Result<Vec<Range<usize>>, MatchError> {
    let fixed = atoms.iter().filter(|atom| !atom.is_path_wildcard()).count();

    let variable = if atoms.iter().any(Atom::is_path_wildcard) {
        count
            .checked_sub(fixed)
            .ok_or(MatchError::TooFewComponents {
                minimum: fixed,
                actual: count,
            })?
    } else {
        if count != atoms.len() {
            return Err(MatchError::ComponentCountMismatch {
                expected: atoms.len(),
                actual: count,
            });
        }
        0
    };

    let mut cursor = 0;
    Ok(atoms
        .iter()
        .map(|atom| {
            let width = if atom.is_path_wildcard() { variable } else { 1 };
            let span = cursor..cursor + width;
            cursor += width;
            span
        })
        .collect())
}
