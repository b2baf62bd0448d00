//! Integration tests for registering capabilities

use marginalia_annotations::{AnnotationModel, CapabilityRegistry, ModifierListCapability};
use marginalia_foundation::{DeclId, DeclarationKind, Error, Result};
use marginalia_syntax::{Declaration, Keyword, ModifierList, SourceUnit};

use crate::{rendered, service_unit};

/// Modifier access for local variables, which have no built-in capability.
#[derive(Debug)]
struct LocalModifiers;

impl ModifierListCapability for LocalModifiers {
    fn kind(&self) -> DeclarationKind {
        DeclarationKind::LocalVariable
    }

    fn sequence<'u>(&self, unit: &'u SourceUnit, decl: DeclId) -> Result<&'u ModifierList> {
        match unit.declaration(decl)? {
            Declaration::LocalVariable(local) => Ok(&local.modifiers),
            other => Err(Error::kind_mismatch(self.kind(), other.kind())),
        }
    }

    fn sequence_mut<'u>(
        &self,
        unit: &'u mut SourceUnit,
        decl: DeclId,
    ) -> Result<&'u mut ModifierList> {
        match unit.declaration_mut(decl)? {
            Declaration::LocalVariable(local) => Ok(&mut local.modifiers),
            other => Err(Error::kind_mismatch(self.kind(), other.kind())),
        }
    }
}

#[test]
fn registered_capability_enables_a_new_kind() {
    let (mut unit, method, _) = service_unit();
    let local = unit.add_local_variable(method, "count", "int").unwrap();
    unit.push_keyword(local, Keyword::Final).unwrap();

    let mut model = AnnotationModel::new();
    assert!(model.add(&mut unit, local, "A").is_err());

    model.registry_mut().register(LocalModifiers);

    let view = model.add(&mut unit, local, "org.checker.NonNull").unwrap();
    assert_eq!(view.kind(), DeclarationKind::LocalVariable);
    assert_eq!(rendered(&unit, local), "@NonNull final");
    assert!(model.has(&unit, local, "NonNull").unwrap());
    assert_eq!(model.list(&unit, local).unwrap(), vec![view.clone()]);

    let mut view = view;
    model.edit(&mut unit, &mut view).set_literal_value("1").unwrap();
    assert_eq!(rendered(&unit, local), "@NonNull(1) final");

    model.remove(&mut unit, local, &view).unwrap();
    assert_eq!(rendered(&unit, local), "final");
}

#[test]
fn custom_registry_replaces_defaults() {
    let (mut unit, method, param) = service_unit();
    let mut registry = CapabilityRegistry::empty();
    registry.register(LocalModifiers);
    let model = AnnotationModel::new().with_registry(registry);

    assert_eq!(model.registry().kinds(), vec![DeclarationKind::LocalVariable]);
    assert!(model.add(&mut unit, method, "A").is_err());
    assert!(model.add(&mut unit, param, "A").is_err());
    assert!(model.capability(DeclarationKind::MemberLevel).is_err());
}

#[test]
fn capability_sees_committed_changes() {
    let (mut unit, method, _) = service_unit();
    let model = AnnotationModel::new();
    model.add(&mut unit, method, "A").unwrap();

    let capability = model.capability(DeclarationKind::MemberLevel).unwrap();
    let sequence = capability.sequence(&unit, method).unwrap();
    assert_eq!(sequence.len(), 1);
    assert_eq!(sequence[0].as_annotation().map(|node| node.name.as_str()), Some("A"));
}
