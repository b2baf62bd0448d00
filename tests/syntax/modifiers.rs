//! Integration tests for modifier sequences and annotation nodes

use marginalia_syntax::{
    DEFAULT_KEY, Element, ElementValue, Keyword, Modifier, SourceUnit, render_modifiers,
};

#[test]
fn push_keeps_parser_order() {
    let mut unit = SourceUnit::default();
    let ty = unit.add_type("T");
    unit.push_keyword(ty, Keyword::Public).unwrap();
    unit.push_annotation(ty, "Late").unwrap();
    unit.push_keyword(ty, Keyword::Final).unwrap();

    let modifiers = unit.declaration(ty).unwrap().modifiers();
    assert_eq!(render_modifiers(modifiers), "public @Late final");
    assert!(!modifiers[0].is_annotation());
    assert!(modifiers[1].is_annotation());
}

#[test]
fn node_ids_are_fresh_and_released_once() {
    let mut unit = SourceUnit::default();
    let ty = unit.add_type("T");
    let a = unit.push_annotation(ty, "A").unwrap();
    let b = unit.push_annotation(ty, "B").unwrap();
    assert_ne!(a, b);
    assert_eq!(unit.live_node_count(), 2);

    assert!(unit.release_node(a));
    assert!(!unit.release_node(a));
    assert!(!unit.is_live(a));
    assert!(unit.is_live(b));

    // A reused slot never brings back the old id
    let c = unit.new_annotation("C", Vec::new()).id;
    assert_ne!(c, a);
    assert!(!unit.is_live(a));
}

#[test]
fn annotation_shapes() {
    let mut unit = SourceUnit::default();
    let marker = unit.new_annotation("Deprecated", Vec::new());
    let single = unit.new_annotation(
        "Retention",
        vec![Element::new(DEFAULT_KEY, ElementValue::literal("RUNTIME"))],
    );
    let named_default = unit.new_annotation(
        "Size",
        vec![
            Element::new(DEFAULT_KEY, ElementValue::literal("1")),
            Element::new("max", ElementValue::literal("2")),
        ],
    );

    assert!(marker.is_marker());
    assert!(single.is_single_value());
    assert!(named_default.is_normal());

    assert_eq!(marker.to_string(), "@Deprecated");
    assert_eq!(single.to_string(), "@Retention(RUNTIME)");
    assert_eq!(named_default.to_string(), "@Size(value = 1, max = 2)");
}

#[test]
fn element_values() {
    let string = ElementValue::string("a \"quoted\" word");
    assert_eq!(string.as_literal(), Some(r#""a \"quoted\" word""#));
    assert_eq!(string.as_string().as_deref(), Some("a \"quoted\" word"));

    let array = ElementValue::array(["A.X", "A.Y"]);
    assert_eq!(array.to_string(), "{A.X, A.Y}");
    assert!(array.as_literal().is_none());
    assert_eq!(ElementValue::literal("42").as_string(), None);
}

#[test]
fn keywords_parse_and_print() {
    for keyword in Keyword::ALL {
        let parsed: Keyword = keyword.as_str().parse().unwrap();
        assert_eq!(parsed, keyword);
    }
    assert!("sealed".parse::<Keyword>().is_err());
    assert_eq!(Modifier::from(Keyword::Static).to_string(), "static");
}
