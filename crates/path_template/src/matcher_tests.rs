//! Tests for path matching.

use super::*;
use crate::parser::parse;

fn matched(template: &str, path: &str) -> Result<Bindings, MatchError> {
    let atoms = parse(template).expect("template should parse");
    match_path(&atoms, path)
}

fn bindings(pairs: &[(&str, &str)]) -> Bindings {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_split_components() {
    assert_eq!(split_components("a/b"), vec!["a", "b"]);
    assert_eq!(split_components("/a/b"), vec!["a", "b"]);
    assert_eq!(split_components("a//b"), vec!["a", "", "b"]);
    assert!(split_components("").is_empty());
    assert!(split_components("/").is_empty());
}

#[test]
fn test_match_fails_on_impossible_match() {
    assert_eq!(
        matched("hello/world", "hello"),
        Err(MatchError::ComponentCountMismatch {
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(
        matched("hello/world", "hello/world/fail"),
        Err(MatchError::ComponentCountMismatch {
            expected: 2,
            actual: 3
        })
    );
}

#[test]
fn test_match_fails_on_mismatched_literal() {
    assert_eq!(
        matched("hello/world", "hello/world2"),
        Err(MatchError::LiteralMismatch {
            expected: "world".to_string(),
            actual: "world2".to_string(),
            position: 1
        })
    );
}

#[test]
fn test_match_literal_only_template_has_no_bindings() {
    assert_eq!(matched("hello/world", "/hello/world"), Ok(Bindings::new()));
}

#[test]
fn test_match_atomic_resource_name() {
    assert_eq!(
        matched("buckets/*/*/objects/*", "buckets/f/o/objects/bar"),
        Ok(bindings(&[("$0", "f"), ("$1", "o"), ("$2", "bar")]))
    );
    assert_eq!(
        matched("/buckets/{hello}", "buckets/world"),
        Ok(bindings(&[("hello", "world")]))
    );
    assert_eq!(
        matched("/buckets/{hello=*}", "buckets/world"),
        Ok(bindings(&[("hello", "world")]))
    );
}

#[test]
fn test_match_escaped_chars_verbatim() {
    assert_eq!(
        matched("buckets/*/objects", "buckets/hello%2F%2Bworld/objects"),
        Ok(bindings(&[("$0", "hello%2F%2Bworld")]))
    );
}

#[test]
fn test_match_template_with_unbounded_wildcard() {
    assert_eq!(
        matched("buckets/*/objects/**", "buckets/foo/objects/bar/baz"),
        Ok(bindings(&[("$0", "foo"), ("$1", "bar/baz")]))
    );
}

#[test]
fn test_match_with_unbound_in_the_middle() {
    assert_eq!(
        matched("bar/**/foo/*", "bar/foo/foo/foo/bar"),
        Ok(bindings(&[("$0", "foo/foo"), ("$1", "bar")]))
    );
}

#[test]
fn test_match_path_wildcard_can_be_empty() {
    assert_eq!(
        matched("bar/**/foo", "bar/foo"),
        Ok(bindings(&[("$0", "")]))
    );
    assert_eq!(matched("**", ""), Ok(bindings(&[("$0", "")])));
}

#[test]
fn test_match_too_few_components() {
    assert_eq!(
        matched("a/**/b/c", "a/b"),
        Err(MatchError::TooFewComponents {
            minimum: 3,
            actual: 2
        })
    );
}

#[test]
fn test_match_multi_atom_binding_joins_components() {
    assert_eq!(
        matched("projects/{name=topics/*}/x", "projects/topics/t1/x"),
        Ok(bindings(&[("name", "topics/t1")]))
    );
    assert_eq!(
        matched("a/b/**/*/{a=hello/world}", "a/b/c/d/e/hello/world"),
        Ok(bindings(&[("$0", "c/d"), ("$1", "e"), ("a", "hello/world")]))
    );
}

#[test]
fn test_match_binding_with_empty_path_wildcard() {
    assert_eq!(
        matched("buckets/{rest=x/**}", "buckets/x"),
        Ok(bindings(&[("rest", "x")]))
    );
    assert_eq!(
        matched("buckets/{rest=x/**}", "buckets/x/y/z"),
        Ok(bindings(&[("rest", "x/y/z")]))
    );
}

#[test]
fn test_match_literal_inside_binding_must_match() {
    assert!(matches!(
        matched("projects/{name=topics/*}", "projects/queues/q1"),
        Err(MatchError::LiteralMismatch { position: 1, .. })
    ));
}

#[test]
fn test_match_wildcard_rejects_empty_component() {
    assert_eq!(
        matched("buckets/*/objects", "buckets//objects"),
        Err(MatchError::EmptyComponent { position: 1 })
    );
}

#[test]
fn test_match_path_wildcard_rejects_only_empty_components() {
    assert_eq!(
        matched("a/**/b", "a//b"),
        Err(MatchError::EmptyComponent { position: 1 })
    );
    assert_eq!(
        matched("a/**", "a/"),
        Err(MatchError::EmptyComponent { position: 1 })
    );
    assert_eq!(
        matched("buckets/{rest=x/**}", "buckets/x/"),
        Err(MatchError::EmptyComponent { position: 2 })
    );
    assert_eq!(
        matched("a/**/b", "a/x//y/b"),
        Ok(bindings(&[("$0", "x//y")]))
    );
}
