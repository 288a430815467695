//! Turning atoms back into text: instantiated paths and canonical templates.

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::atom::{groups, Atom, AtomKind};
use crate::errors::MissingBindingError;

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;

/// Build a concrete path from `atoms` and a value per binding.
///
/// Values are inserted unchanged, so a value containing `/` expands into
/// several path components. A binding made only of literals always emits
/// its literal text and ignores any supplied value. A binding containing
/// `**` whose value is empty contributes no component at all.
pub fn instantiate<S: BuildHasher>(
    atoms: &[Atom],
    bindings: &HashMap<String, String, S>,
) -> Result<String, MissingBindingError> {
    let mut segments: Vec<&str> = Vec::new();

    for group in groups(atoms) {
        let Some(name) = group.name else {
            if let AtomKind::Literal(text) = &group.atoms[0].kind {
                segments.push(text);
            }
            continue;
        };

        if !group.has_wildcard() {
            segments.extend(group.atoms.iter().filter_map(|atom| match &atom.kind {
                AtomKind::Literal(text) => Some(text.as_str()),
                _ => None,
            }));
            continue;
        }

        match bindings.get(name) {
            Some(value) if value.is_empty() && group.has_path_wildcard() => {}
            Some(value) => segments.push(value),
            None => {
                return Err(MissingBindingError {
                    name: name.to_string(),
                })
            }
        }
    }

    Ok(segments.join("/"))
}

/// Render the canonical text of a template.
///
/// Bare literals are emitted as-is; every named group, positional or
/// explicit, is emitted as `{name=pattern}`. No leading `/` is produced.
pub fn render(atoms: &[Atom]) -> String {
    groups(atoms)
        .iter()
        .map(|group| match group.name {
            Some(name) => format!("{{{}={}}}", name, group.pattern()),
            None => group.pattern(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
