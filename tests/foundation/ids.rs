//! Integration tests for identifiers and declaration kinds

use std::collections::HashSet;

use marginalia_foundation::{DeclId, DeclarationKind, NodeId, UnitId};

#[test]
fn node_ids_differ_by_generation() {
    let first = NodeId::new(3, 1);
    let reused = NodeId::new(3, 3);
    assert_ne!(first, reused);
    assert_eq!(first, NodeId::new(3, 1));
}

#[test]
fn node_id_formats() {
    let id = NodeId::new(12, 5);
    assert_eq!(format!("{id:?}"), "NodeId(12v5)");
    assert_eq!(format!("{id}"), "Node(12)");
}

#[test]
fn node_ids_are_hashable() {
    let ids: HashSet<_> = (0..10).map(|i| NodeId::new(i, 1)).collect();
    assert_eq!(ids.len(), 10);
    assert!(ids.contains(&NodeId::new(4, 1)));
    assert!(!ids.contains(&NodeId::new(4, 3)));
}

#[test]
fn decl_id_formats() {
    let id = DeclId(7);
    assert_eq!(id.index(), 7);
    assert_eq!(format!("{id:?}"), "DeclId(7)");
    assert_eq!(format!("{id}"), "Decl(7)");
}

#[test]
fn declaration_kinds() {
    assert_eq!(DeclarationKind::ALL.len(), 3);
    let names: Vec<_> = DeclarationKind::ALL.iter().map(|kind| kind.name()).collect();
    assert_eq!(names, vec!["member", "parameter", "local-variable"]);
    assert_eq!(DeclarationKind::ParameterLevel.to_string(), "parameter");
}

#[test]
fn unit_ids_never_repeat() {
    let ids: HashSet<_> = (0..100).map(|_| UnitId::fresh()).collect();
    assert_eq!(ids.len(), 100);
}
