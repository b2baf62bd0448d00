//! Integration tests for declarations in a source unit

use marginalia_foundation::{DeclId, DeclarationKind, ErrorKind};
use marginalia_syntax::{Declaration, MemberKind, SourceUnit};

#[test]
fn builds_a_type_tree() {
    let mut unit = SourceUnit::new("org.example");
    let ty = unit.add_type("Account");
    let field = unit.add_field(ty, "balance", "long").unwrap();
    let ctor = unit.add_constructor(ty).unwrap();
    let method = unit.add_method(ty, "deposit").unwrap();
    let amount = unit.add_parameter(method, "amount", "long").unwrap();
    let total = unit.add_local_variable(method, "total", "long").unwrap();

    assert_eq!(unit.package(), Some("org.example"));
    assert_eq!(unit.declaration_count(), 6);
    assert_eq!(unit.members_of(ty).unwrap(), &[field, ctor, method]);
    assert_eq!(unit.parameters_of(method).unwrap(), &[amount]);
    assert_eq!(unit.locals_of(method).unwrap(), &[total]);

    let ctor_decl = unit.declaration(ctor).unwrap();
    assert_eq!(ctor_decl.name(), "Account");
    assert_eq!(ctor_decl.as_member().map(|m| m.kind), Some(MemberKind::Constructor));
    assert_eq!(unit.declaration(amount).unwrap().owner(), Some(method));
    assert_eq!(unit.declaration(ty).unwrap().owner(), None);
}

#[test]
fn declaration_kinds() {
    let mut unit = SourceUnit::default();
    let ty = unit.add_type("T");
    let method = unit.add_method(ty, "m").unwrap();
    let param = unit.add_parameter(method, "p", "int").unwrap();
    let local = unit.add_local_variable(method, "l", "int").unwrap();

    let kinds: Vec<_> = [ty, method, param, local]
        .into_iter()
        .map(|id| unit.declaration(id).unwrap().kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            DeclarationKind::MemberLevel,
            DeclarationKind::MemberLevel,
            DeclarationKind::ParameterLevel,
            DeclarationKind::LocalVariable,
        ]
    );
    assert!(matches!(
        unit.declaration(local).unwrap(),
        Declaration::LocalVariable(decl) if decl.type_name == "int"
    ));
}

#[test]
fn unknown_owner_fails() {
    let mut unit = SourceUnit::default();
    let err = unit.add_method(DeclId(9), "m").unwrap_err();
    assert_eq!(err.kind, ErrorKind::DeclarationNotFound(DeclId(9)));
    assert_eq!(unit.declaration_count(), 0);
}

#[test]
fn parameter_owner_must_be_member() {
    let mut unit = SourceUnit::default();
    let ty = unit.add_type("T");
    let method = unit.add_method(ty, "m").unwrap();
    let param = unit.add_parameter(method, "p", "int").unwrap();

    let err = unit.add_parameter(param, "q", "int").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::KindMismatch {
            expected: DeclarationKind::MemberLevel,
            actual: DeclarationKind::ParameterLevel,
        }
    );
}

#[test]
fn declarations_iterate_in_creation_order() {
    let mut unit = SourceUnit::default();
    let a = unit.add_type("A");
    let b = unit.add_type("B");
    let names: Vec<_> = unit
        .declarations()
        .map(|(id, decl)| (id, decl.name().to_string()))
        .collect();
    assert_eq!(names, vec![(a, "A".to_string()), (b, "B".to_string())]);
}
