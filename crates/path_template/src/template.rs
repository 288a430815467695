//! The `PathTemplate` facade.

use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::atom::{groups, Atom};
use crate::errors::{MatchError, MissingBindingError, ParseError};
use crate::matcher::{self, Bindings};
use crate::parser;
use crate::render;

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;

/// A parsed resource-name template such as `projects/{project}/topics/*`.
///
/// The template is parsed once on construction and is immutable afterwards,
/// so a single instance can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use path_template::PathTemplate;
///
/// let template = PathTemplate::new("buckets/*/objects/**")?;
/// assert_eq!(template.size(), 4);
///
/// let bindings = template.match_path("buckets/foo/objects/bar/baz")?;
/// assert_eq!(bindings["$0"], "foo");
/// assert_eq!(bindings["$1"], "bar/baz");
///
/// assert_eq!(template.instantiate(&bindings)?, "buckets/foo/objects/bar/baz");
/// assert_eq!(template.to_string(), "buckets/{$0=*}/objects/{$1=**}");
/// # Ok::<(), path_template::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PathTemplate {
    source: String,
    atoms: Vec<Atom>,
}

impl PathTemplate {
    /// Parse a template string.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text contains an illegal character,
    /// an unterminated or nested binding, a duplicate binding name, more
    /// than one `**`, or no segments at all.
    pub fn new(template: &str) -> Result<Self, ParseError> {
        let atoms = parser::parse(template)?;
        Ok(Self {
            source: template.to_string(),
            atoms,
        })
    }

    /// The template text this instance was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of atoms after flattening bindings.
    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Whether the template contains a `**` atom.
    pub fn has_path_wildcard(&self) -> bool {
        self.atoms.iter().any(Atom::is_path_wildcard)
    }

    /// Names of all bindings, explicit and positional, in template order.
    pub fn binding_names(&self) -> Vec<&str> {
        groups(&self.atoms)
            .into_iter()
            .filter_map(|group| group.name)
            .collect()
    }

    /// Match a concrete path, returning the value bound to each name.
    ///
    /// # Errors
    ///
    /// Returns a [`MatchError`] if the component count does not fit the
    /// template or a literal component differs.
    pub fn match_path(&self, path: &str) -> Result<Bindings, MatchError> {
        matcher::match_path(&self.atoms, path)
    }

    /// Shorthand for `match_path(path).is_ok()`.
    pub fn matches(&self, path: &str) -> bool {
        self.match_path(path).is_ok()
    }

    /// Build a concrete path from binding values.
    ///
    /// # Errors
    ///
    /// Returns a [`MissingBindingError`] naming the first binding that
    /// contains a wildcard and has no value.
    pub fn instantiate<S: BuildHasher>(
        &self,
        bindings: &HashMap<String, String, S>,
    ) -> Result<String, MissingBindingError> {
        render::instantiate(&self.atoms, bindings)
    }

    /// Like [`PathTemplate::instantiate`], taking any list of name/value pairs.
    ///
    /// ```
    /// use path_template::PathTemplate;
    ///
    /// let template = PathTemplate::new("projects/{project}/topics/{topic}")?;
    /// let path = template.instantiate_from([("project", "p1"), ("topic", "t1")])?;
    /// assert_eq!(path, "projects/p1/topics/t1");
    /// # Ok::<(), path_template::Error>(())
    /// ```
    pub fn instantiate_from<I, K, V>(&self, pairs: I) -> Result<String, MissingBindingError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let bindings: Bindings = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.instantiate(&bindings)
    }
}

impl fmt::Display for PathTemplate {
    /// Writes the canonical form, e.g. `buckets/{$0=*}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(&self.atoms))
    }
}

// Equality is structural: `/a/*` and `a/{$0=*}` are the same template.
impl PartialEq for PathTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.atoms == other.atoms
    }
}

impl Eq for PathTemplate {}

impl Hash for PathTemplate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.atoms.hash(state);
    }
}

impl FromStr for PathTemplate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PathTemplate {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for PathTemplate {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let atoms = parser::parse(&value)?;
        Ok(Self {
            source: value,
            atoms,
        })
    }
}

impl Serialize for PathTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PathTemplate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::try_from(text).map_err(serde::de::Error::custom)
    }
}
