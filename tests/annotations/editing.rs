//! Integration tests for structural edits through views

use marginalia_annotations::{AnnotationModel, EnumConstant};
use marginalia_syntax::{DEFAULT_KEY, Keyword};

use crate::{rendered, service_unit};

#[test]
fn edited_view_keeps_identity_and_position() {
    let (mut unit, method, _) = service_unit();
    let model = AnnotationModel::new();
    model.add(&mut unit, method, "Before").unwrap();
    let mut view = model.add(&mut unit, method, "Timed").unwrap();
    unit.push_keyword(method, Keyword::Public).unwrap();
    let taken_before = view.clone();

    model
        .edit(&mut unit, &mut view)
        .set_literal_value_for("millis", "500")
        .unwrap();

    assert_eq!(view.owner(), method);
    assert_ne!(view, taken_before);
    assert!(!taken_before.is_live(&unit));
    assert_eq!(model.list(&unit, method).unwrap()[1], view);
    assert_eq!(rendered(&unit, method), "@Before @Timed(millis = 500) public");
    assert_eq!(model.find(&unit, method, "Timed").unwrap(), Some(view));
}

#[test]
fn pre_edit_view_no_longer_removes() {
    let (mut unit, method, _) = service_unit();
    let model = AnnotationModel::new();
    let mut view = model.add(&mut unit, method, "Timed").unwrap();
    let taken_before = view.clone();
    model.edit(&mut unit, &mut view).set_literal_value("1").unwrap();

    model.remove(&mut unit, method, &taken_before).unwrap();
    assert!(model.has(&unit, method, "Timed").unwrap());

    model.remove(&mut unit, method, &view).unwrap();
    assert!(!model.has(&unit, method, "Timed").unwrap());
}

#[test]
fn annotation_shapes_follow_edits() {
    let (mut unit, _, param) = service_unit();
    let model = AnnotationModel::new();
    let mut view = model.add(&mut unit, param, "Size").unwrap();
    assert!(view.is_marker(&unit));

    model.edit(&mut unit, &mut view).set_literal_value("3").unwrap();
    assert!(view.is_single_value(&unit));

    model
        .edit(&mut unit, &mut view)
        .set_literal_value_for("max", "9")
        .unwrap();
    assert!(view.is_normal(&unit));
    assert_eq!(view.render(&unit).as_deref(), Some("@Size(value = 3, max = 9)"));

    model.edit(&mut unit, &mut view).remove_all_values().unwrap();
    assert!(view.is_marker(&unit));
}

#[test]
fn string_values_round_trip() {
    let (mut unit, _, param) = service_unit();
    let model = AnnotationModel::new();
    let mut view = model.add(&mut unit, param, "Pattern").unwrap();
    let regex = "^\\d+\t\"end\"$";

    model
        .edit(&mut unit, &mut view)
        .set_string_value_for("regexp", regex)
        .unwrap();

    assert_eq!(view.string_value(&unit, "regexp").as_deref(), Some(regex));
    assert_eq!(view.string_value(&unit, DEFAULT_KEY), None);
}

#[test]
fn enum_values_register_each_type_once() {
    let (mut unit, method, _) = service_unit();
    let model = AnnotationModel::new();
    let mut view = model.add(&mut unit, method, "Target").unwrap();

    model
        .edit(&mut unit, &mut view)
        .set_enum_value(&[
            EnumConstant::new("java.lang.annotation.ElementType", "METHOD"),
            EnumConstant::new("java.lang.annotation.ElementType", "FIELD"),
        ])
        .unwrap()
        .set_enum_value_for(
            "policy",
            &[EnumConstant::new("java.lang.annotation.RetentionPolicy", "CLASS")],
        )
        .unwrap();

    assert_eq!(
        view.render(&unit).as_deref(),
        Some("@Target(value = {ElementType.METHOD, ElementType.FIELD}, policy = RetentionPolicy.CLASS)")
    );
    let imports: Vec<_> = unit.imports().iter().collect();
    assert_eq!(
        imports,
        vec![
            "java.lang.annotation.ElementType",
            "java.lang.annotation.RetentionPolicy"
        ]
    );
}

#[test]
fn rename_through_qualified_name() {
    let (mut unit, method, _) = service_unit();
    let model = AnnotationModel::new();
    let mut view = model.add(&mut unit, method, "Old").unwrap();

    model
        .edit(&mut unit, &mut view)
        .set_name("org.example.New")
        .unwrap();

    assert!(model.has(&unit, method, "New").unwrap());
    assert!(model.has(&unit, method, "org.example.New").unwrap());
    assert!(!model.has(&unit, method, "Old").unwrap());
    assert!(unit.has_import("org.example.New"));
}

#[test]
fn edit_after_remove_changes_nothing() {
    let (mut unit, method, _) = service_unit();
    let model = AnnotationModel::new();
    let mut view = model.add(&mut unit, method, "Gone").unwrap();
    model.add(&mut unit, method, "Kept").unwrap();
    model.remove(&mut unit, method, &view).unwrap();
    let snapshot = rendered(&unit, method);
    let id = view.node_id();

    model
        .edit(&mut unit, &mut view)
        .set_string_value("x")
        .unwrap()
        .set_name("a.Other")
        .unwrap();

    assert_eq!(rendered(&unit, method), snapshot);
    assert_eq!(view.node_id(), id);
    assert!(unit.imports().is_empty());
}

#[test]
fn qualified_rename_to_same_simple_name_registers_import() {
    let (mut unit, method, _) = service_unit();
    let model = AnnotationModel::new();
    let mut view = model.add(&mut unit, method, "Named").unwrap();

    model
        .edit(&mut unit, &mut view)
        .set_name("javax.inject.Named")
        .unwrap();

    assert_eq!(view.name(&unit), Some("Named"));
    assert!(unit.has_import("javax.inject.Named"));
    assert_eq!(
        view.qualified_name(&unit).as_deref(),
        Some("javax.inject.Named")
    );
}

#[test]
fn enum_value_already_in_place_registers_import() {
    let (mut unit, method, _) = service_unit();
    let model = AnnotationModel::new();
    let mut view = model.add(&mut unit, method, "Retention").unwrap();
    model
        .edit(&mut unit, &mut view)
        .set_literal_value("RetentionPolicy.RUNTIME")
        .unwrap();
    assert!(unit.imports().is_empty());

    model
        .edit(&mut unit, &mut view)
        .set_enum_value(&[EnumConstant::new(
            "java.lang.annotation.RetentionPolicy",
            "RUNTIME",
        )])
        .unwrap();

    assert!(unit.has_import("java.lang.annotation.RetentionPolicy"));
    assert_eq!(
        view.render(&unit).as_deref(),
        Some("@Retention(RetentionPolicy.RUNTIME)")
    );
}

#[test]
fn edit_errors_carry_the_edit_frame() {
    let (mut unit, method, _) = service_unit();
    let model = AnnotationModel::new();
    let mut view = model.add(&mut unit, method, "Size").unwrap();

    let err = model
        .edit(&mut unit, &mut view)
        .set_literal_value_for("bad key", "1")
        .unwrap_err();

    let context = err.context.unwrap();
    assert_eq!(context.operation.as_deref(), Some("set_literal_value"));
    assert_eq!(context.stack, vec!["edit".to_string()]);
    assert!(format!("{context}").contains("  in edit"));
}
