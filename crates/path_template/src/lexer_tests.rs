//! Tests for the path template tokenizer.

use super::*;

fn kinds(input: &str) -> Vec<Token> {
    tokenize(input)
        .expect("tokenize should succeed")
        .into_iter()
        .map(|spanned| spanned.token)
        .collect()
}

fn literal(text: &str) -> Token {
    Token::Literal(text.to_string())
}

#[test]
fn test_tokenize_simple_path() {
    assert_eq!(
        kinds("buckets/*/objects/**"),
        vec![
            literal("buckets"),
            Token::Slash,
            Token::Wildcard,
            Token::Slash,
            literal("objects"),
            Token::Slash,
            Token::PathWildcard,
            Token::End,
        ]
    );
}

#[test]
fn test_tokenize_strips_one_leading_slash() {
    assert_eq!(kinds("/a"), vec![literal("a"), Token::End]);
    assert_eq!(kinds("//a"), vec![Token::Slash, literal("a"), Token::End]);
}

#[test]
fn test_tokenize_binding() {
    assert_eq!(
        kinds("{name=hello/*}"),
        vec![
            Token::LeftBrace,
            literal("name"),
            Token::Equals,
            literal("hello"),
            Token::Slash,
            Token::Wildcard,
            Token::RightBrace,
            Token::End,
        ]
    );
}

#[test]
fn test_tokenize_safe_literal_characters() {
    assert_eq!(
        kinds("helloazAZ09-.~_what:x"),
        vec![literal("helloazAZ09-.~_what:x"), Token::End]
    );
}

#[test]
fn test_tokenize_percent_escapes() {
    assert_eq!(
        kinds("hello%2F%2bworld"),
        vec![literal("hello%2F%2bworld"), Token::End]
    );
}

#[test]
fn test_tokenize_rejects_malformed_escape() {
    assert_eq!(
        tokenize("ab%2"),
        Err(ParseError::MalformedEscape { position: 2 })
    );
    assert_eq!(
        tokenize("ab%zz"),
        Err(ParseError::MalformedEscape { position: 2 })
    );
    assert_eq!(
        tokenize("/%"),
        Err(ParseError::MalformedEscape { position: 1 })
    );
}

#[test]
fn test_tokenize_rejects_illegal_characters() {
    assert_eq!(
        tokenize("/a b"),
        Err(ParseError::IllegalCharacter {
            character: ' ',
            position: 2
        })
    );
    assert!(matches!(
        tokenize("a?b"),
        Err(ParseError::IllegalCharacter { character: '?', .. })
    ));
    assert!(matches!(
        tokenize("caf\u{e9}"),
        Err(ParseError::IllegalCharacter { .. })
    ));
}

#[test]
fn test_tokenize_positions_account_for_leading_slash() {
    let tokens = tokenize("/ab/*").unwrap();
    let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![1, 3, 4, 5]);
}

#[test]
fn test_tokenize_triple_star() {
    assert_eq!(
        kinds("***"),
        vec![Token::PathWildcard, Token::Wildcard, Token::End]
    );
}

#[test]
fn test_tokenize_empty_input() {
    assert_eq!(kinds(""), vec![Token::End]);
    assert_eq!(kinds("/"), vec![Token::End]);
}
