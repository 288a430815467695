//! Flattened template atoms.
//!
//! A parsed template is a flat sequence of atoms, one per path component it
//! consumes (the `**` atom consumes a variable number). Bindings do not
//! survive as a tree: their interior atoms are tagged with the binding name.

use std::fmt;
use std::ops::Range;

#[cfg(test)]
#[path = "atom_tests.rs"]
mod tests;

/// What an atom matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AtomKind {
    /// Exactly this component, byte for byte.
    Literal(String),
    /// Any single non-empty component (`*`).
    Wildcard,
    /// Zero or more consecutive components (`**`).
    PathWildcard,
}

/// One unit of a flattened template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    pub kind: AtomKind,
    /// Explicit binding name, or the positional `$N` name for wildcards
    /// outside any binding. `None` only for bare literals.
    pub binding: Option<String>,
}

impl Atom {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            kind: AtomKind::Literal(text.into()),
            binding: None,
        }
    }

    pub fn wildcard() -> Self {
        Self {
            kind: AtomKind::Wildcard,
            binding: None,
        }
    }

    pub fn path_wildcard() -> Self {
        Self {
            kind: AtomKind::PathWildcard,
            binding: None,
        }
    }

    /// Tag this atom with a binding name.
    pub fn bound_to(mut self, name: impl Into<String>) -> Self {
        self.binding = Some(name.into());
        self
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, AtomKind::Literal(_))
    }

    pub fn is_path_wildcard(&self) -> bool {
        matches!(self.kind, AtomKind::PathWildcard)
    }

    pub fn binding_name(&self) -> Option<&str> {
        self.binding.as_deref()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AtomKind::Literal(text) => f.write_str(text),
            AtomKind::Wildcard => f.write_str("*"),
            AtomKind::PathWildcard => f.write_str("**"),
        }
    }
}

/// A maximal run of consecutive atoms that share a binding name.
///
/// Bare literals form unnamed single-atom groups. Binding names are unique
/// within a template, so a run never merges two distinct bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Group<'a> {
    pub name: Option<&'a str>,
    pub range: Range<usize>,
    pub atoms: &'a [Atom],
}

impl Group<'_> {
    pub fn has_wildcard(&self) -> bool {
        self.atoms.iter().any(|atom| !atom.is_literal())
    }

    pub fn has_path_wildcard(&self) -> bool {
        self.atoms.iter().any(Atom::is_path_wildcard)
    }

    /// The sub-pattern text of this group, e.g. `hello/*`.
    pub fn pattern(&self) -> String {
        self.atoms
            .iter()
            .map(Atom::to_string)
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Split an atom sequence into binding groups, in order.
pub(crate) fn groups(atoms: &[Atom]) -> Vec<Group<'_>> {
    let mut result = Vec::new();
    let mut start = 0;

    while start < atoms.len() {
        let name = atoms[start].binding_name();
        let mut end = start + 1;
        if name.is_some() {
            while end < atoms.len() && atoms[end].binding_name() == name {
                end += 1;
            }
        }

        result.push(Group {
            name,
            range: start..end,
            atoms: &atoms[start..end],
        });
        start = end;
    }

    result
}
