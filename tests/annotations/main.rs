//! Integration tests for Layer 2: Annotations
//!
//! Tests for the annotation model, views, the editor, and capabilities.

mod capabilities;
mod editing;

use marginalia_foundation::DeclId;
use marginalia_syntax::SourceUnit;

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A unit with one type, one method on it, and one parameter on the method.
pub(crate) fn service_unit() -> (SourceUnit, DeclId, DeclId) {
    let mut unit = SourceUnit::new("org.example");
    let ty = unit.add_type("Service");
    let method = unit.add_method(ty, "handle").unwrap();
    let param = unit.add_parameter(method, "request", "Request").unwrap();
    (unit, method, param)
}

pub(crate) fn rendered(unit: &SourceUnit, decl: DeclId) -> String {
    marginalia_syntax::render_modifiers(unit.declaration(decl).unwrap().modifiers())
}
