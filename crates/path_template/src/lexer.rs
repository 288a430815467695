//! Tokenizer for path template text.

use std::fmt;

use crate::errors::ParseError;

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;

/// A single lexical unit of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Slash,
    Wildcard,
    PathWildcard,
    LeftBrace,
    RightBrace,
    Equals,
    Literal(String),
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Slash => write!(f, "'/'"),
            Token::Wildcard => write!(f, "'*'"),
            Token::PathWildcard => write!(f, "'**'"),
            Token::LeftBrace => write!(f, "'{{'"),
            Token::RightBrace => write!(f, "'}}'"),
            Token::Equals => write!(f, "'='"),
            Token::Literal(text) => write!(f, "literal '{}'", text),
            Token::End => write!(f, "end of template"),
        }
    }
}

/// A token together with the byte offset it started at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Returns true for characters that may appear in a literal run.
///
/// `%` is handled separately since it must introduce a `%XX` escape.
fn is_literal_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '~' | '_' | ':' | '$')
}

/// Split template text into tokens, terminated by [`Token::End`].
///
/// One leading `/` is skipped. Positions in the returned tokens and in
/// errors refer to the original input.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, ParseError> {
    let offset = usize::from(input.starts_with('/'));
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut chars = input[offset..].char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        let position = index + offset;
        let token = match c {
            '/' => Token::Slash,
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,
            '=' => Token::Equals,
            '*' => {
                if matches!(chars.peek(), Some((_, '*'))) {
                    chars.next();
                    Token::PathWildcard
                } else {
                    Token::Wildcard
                }
            }
            c if c == '%' || is_literal_char(c) => {
                let mut literal = String::new();
                let mut current = Some((index, c));

                while let Some((i, ch)) = current {
                    let at = i + offset;
                    if ch == '%' {
                        let escape = bytes
                            .get(at + 1..at + 3)
                            .ok_or(ParseError::MalformedEscape { position: at })?;
                        if !escape.iter().all(u8::is_ascii_hexdigit) {
                            return Err(ParseError::MalformedEscape { position: at });
                        }
                        literal.push('%');
                        // Both escape bytes are ASCII hex digits.
                        for _ in 0..2 {
                            if let Some((_, hex)) = chars.next() {
                                literal.push(hex);
                            }
                        }
                    } else {
                        literal.push(ch);
                    }

                    current = match chars.peek() {
                        Some(&(_, next)) if next == '%' || is_literal_char(next) => chars.next(),
                        _ => None,
                    };
                }

                Token::Literal(literal)
            }
            other => {
                return Err(ParseError::IllegalCharacter {
                    character: other,
                    position,
                })
            }
        };

        tokens.push(Spanned { token, position });
    }

    tokens.push(Spanned {
        token: Token::End,
        position: input.len(),
    });

    Ok(tokens)
}
