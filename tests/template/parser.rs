//! Integration tests for the example parser

use pronouns_foundation::{Declension, ErrorKind};
use pronouns_template::{Casing, Node, alias, parse};

fn nodes(source: &str) -> Vec<Node> {
    parse(source)
        .unwrap()
        .nodes()
        .map(|n| n.node().clone())
        .collect()
}

#[test]
fn every_alias_parses() {
    for name in alias::names() {
        let source = format!("{{{name}}}");
        let parsed = nodes(&source);
        assert_eq!(parsed.len(), 1, "{source}");
        assert!(matches!(parsed[0], Node::Pronoun { .. }));
    }
}

#[test]
fn aliases_by_example_word() {
    let expected = [
        ("{they}", Declension::Subject),
        ("{them}", Declension::Object),
        ("{their}", Declension::PossessiveDeterminer),
        ("{theirs}", Declension::PossessivePronoun),
        ("{themselves}", Declension::Reflexive),
        ("{themself}", Declension::Reflexive),
    ];
    for (source, declension) in expected {
        assert_eq!(
            nodes(source),
            vec![Node::Pronoun {
                declension,
                casing: Casing::Lower
            }]
        );
    }
}

#[test]
fn upper_case_tags_capitalize() {
    assert_eq!(
        nodes("{PP}"),
        vec![Node::Pronoun {
            declension: Declension::PossessivePronoun,
            casing: Casing::Upper
        }]
    );
}

#[test]
fn adjacent_tags() {
    assert_eq!(nodes("{s}{o}[a/b]").len(), 3);
}

#[test]
fn node_ids_are_unique_within_example() {
    let example = parse("{s} and {s} and {s}").unwrap();
    let mut ids: Vec<_> = example.nodes().map(|n| n.id()).collect();
    let count = ids.len();
    ids.sort_by_key(ToString::to_string);
    ids.dedup();
    assert_eq!(ids.len(), count);
}

#[test]
fn separate_parses_get_fresh_ids() {
    let a = parse("{s}").unwrap();
    let b = parse("{s}").unwrap();
    assert_ne!(a.id(), b.id());
    assert_ne!(
        a.nodes().next().map(|n| n.id()),
        b.nodes().next().map(|n| n.id())
    );
}

#[test]
fn unknown_tag_error() {
    let err = parse("Hi {zz}").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownTag("zz".to_string()));
    assert_eq!(err.to_string(), "unknown pronoun declension 'zz'");
}

#[test]
fn malformed_tag_errors() {
    for (source, offset) in [("{s", 0), ("a [is/are", 2), ("[is]", 0), ("x {s}{", 5)] {
        match parse(source).unwrap_err().kind {
            ErrorKind::MalformedTag { offset: at, .. } => assert_eq!(at, offset, "{source}"),
            other => panic!("{source}: expected malformed tag, got {other:?}"),
        }
    }
}
