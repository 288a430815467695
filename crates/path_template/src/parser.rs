//! Recursive descent parser producing the flattened atom sequence.
//!
//! Grammar:
//!
//! ```text
//! Template = Segment { "/" Segment }
//! Segment  = Literal | "*" | "**" | Binding
//! Binding  = "{" Name [ "=" Segment { "/" Segment } ] "}"
//! ```

use std::collections::HashSet;

use tracing::debug;

use crate::atom::{Atom, AtomKind};
use crate::errors::ParseError;
use crate::lexer::{tokenize, Spanned, Token};

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

/// Parse template text into its flattened atoms.
///
/// Positional names (`$0`, `$1`, ...) are assigned to every wildcard that
/// is not inside a binding, counted left to right.
pub fn parse(input: &str) -> Result<Vec<Atom>, ParseError> {
    let tokens = tokenize(input)?;
    if matches!(tokens.first(), Some(Spanned { token: Token::End, .. })) {
        return Err(ParseError::EmptyTemplate);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        atoms: Vec::new(),
        names: HashSet::new(),
    };
    parser.parse_template()?;
    let atoms = parser.assign_positional_names()?;

    debug!(template = input, atoms = atoms.len(), "Parsed path template");
    Ok(atoms)
}

/// Returns true for field-path style identifiers such as `project`,
/// `topic.name` or a positional `$0`.
fn is_valid_binding_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$'))
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    atoms: Vec<Atom>,
    names: HashSet<String>,
}

impl Parser {
    fn peek(&self) -> &Spanned {
        // The token stream always ends with `End`, which is never consumed.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Spanned {
        let token = self.peek().clone();
        if token.token != Token::End {
            self.pos += 1;
        }
        token
    }

    fn unexpected(spanned: &Spanned, expected: &str) -> ParseError {
        match spanned.token {
            Token::End => ParseError::UnexpectedEnd {
                expected: expected.to_string(),
            },
            ref other => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: other.to_string(),
                position: spanned.position,
            },
        }
    }

    fn parse_template(&mut self) -> Result<(), ParseError> {
        loop {
            self.parse_segment(None)?;

            let next = self.advance();
            match next.token {
                Token::Slash => continue,
                Token::End => return Ok(()),
                _ => return Err(Self::unexpected(&next, "'/' or end of template")),
            }
        }
    }

    /// Parse one segment, appending its atoms. `binding` is the name of the
    /// enclosing binding when parsing a binding's sub-path.
    fn parse_segment(&mut self, binding: Option<&str>) -> Result<(), ParseError> {
        let next = self.advance();
        let kind = match next.token {
            Token::Literal(text) => {
                if text.contains('$') {
                    return Err(ParseError::InvalidLiteral { literal: text });
                }
                AtomKind::Literal(text)
            }
            Token::Wildcard => AtomKind::Wildcard,
            Token::PathWildcard => {
                if self.atoms.iter().any(Atom::is_path_wildcard) {
                    return Err(ParseError::MultipleUnboundWildcards);
                }
                AtomKind::PathWildcard
            }
            Token::LeftBrace => {
                return match binding {
                    Some(outer) => Err(ParseError::NestedBinding {
                        name: outer.to_string(),
                    }),
                    None => self.parse_binding(),
                };
            }
            ref other => {
                let expected = "a literal, '*', '**' or a binding";
                return Err(match (other, binding) {
                    (Token::End, Some(name)) => ParseError::UnterminatedBinding {
                        name: name.to_string(),
                    },
                    _ => Self::unexpected(&next, expected),
                });
            }
        };

        self.atoms.push(Atom {
            kind,
            binding: binding.map(str::to_string),
        });
        Ok(())
    }

    fn parse_binding(&mut self) -> Result<(), ParseError> {
        let next = self.advance();
        let name = match next.token {
            Token::Literal(name) => name,
            _ => return Err(Self::unexpected(&next, "a binding name")),
        };

        if !is_valid_binding_name(&name) {
            return Err(ParseError::InvalidBindingName { name });
        }
        if !self.names.insert(name.clone()) {
            return Err(ParseError::DuplicateBinding { name });
        }

        let next = self.advance();
        match next.token {
            Token::RightBrace => {
                self.atoms.push(Atom::wildcard().bound_to(name));
                return Ok(());
            }
            Token::Equals => {}
            Token::End => return Err(ParseError::UnterminatedBinding { name }),
            _ => return Err(Self::unexpected(&next, "'=' or '}'")),
        }

        loop {
            self.parse_segment(Some(name.as_str()))?;

            let next = self.advance();
            match next.token {
                Token::Slash => continue,
                Token::RightBrace => return Ok(()),
                Token::End => return Err(ParseError::UnterminatedBinding { name }),
                Token::LeftBrace => return Err(ParseError::NestedBinding { name }),
                _ => return Err(Self::unexpected(&next, "'/' or '}'")),
            }
        }
    }

    fn assign_positional_names(self) -> Result<Vec<Atom>, ParseError> {
        let Parser {
            mut atoms, names, ..
        } = self;

        let mut index = 0;
        for atom in atoms
            .iter_mut()
            .filter(|atom| atom.binding.is_none() && !atom.is_literal())
        {
            let name = format!("${}", index);
            if names.contains(&name) {
                return Err(ParseError::DuplicateBinding { name });
            }
            atom.binding = Some(name);
            index += 1;
        }

        Ok(atoms)
    }
}
