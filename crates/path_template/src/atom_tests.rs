use super::*;

#[test]
fn test_atom_display() {
    assert_eq!(Atom::literal("buckets").to_string(), "buckets");
    assert_eq!(Atom::wildcard().to_string(), "*");
    assert_eq!(Atom::path_wildcard().to_string(), "**");
}

#[test]
fn test_groups_split_on_binding_changes() {
    let atoms = vec![
        Atom::literal("buckets"),
        Atom::wildcard().bound_to("$0"),
        Atom::literal("hello").bound_to("a"),
        Atom::wildcard().bound_to("a"),
        Atom::literal("objects"),
        Atom::literal("more"),
    ];

    let groups = groups(&atoms);
    let summary: Vec<(Option<&str>, std::ops::Range<usize>)> = groups
        .iter()
        .map(|group| (group.name, group.range.clone()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (None, 0..1),
            (Some("$0"), 1..2),
            (Some("a"), 2..4),
            (None, 4..5),
            (None, 5..6),
        ]
    );
    assert_eq!(groups[2].pattern(), "hello/*");
    assert!(groups[2].has_wildcard());
    assert!(!groups[2].has_path_wildcard());
    assert!(!groups[0].has_wildcard());
}

#[test]
fn test_groups_of_empty_sequence() {
    assert!(groups(&[]).is_empty());
}
