//! Structural edits of one annotation.
//!
//! Every setter builds a replacement node with a fresh identity, splices it
//! into the owning declaration through the capability of the view's kind,
//! retires the old identity, and moves the view onto the new node. Edits on
//! a stale view, or on a view taken from another unit, change nothing.
//!
//! Imports named by an edit are registered whenever the view is live, even
//! if the node already reads the same.

use log::debug;
use marginalia_foundation::{DeclId, Error, Result, name};
use marginalia_syntax::{DEFAULT_KEY, Element, ElementValue, SourceUnit, TypeRef};

use crate::model::{AnnotationModel, in_edit_context};
use crate::view::Annotation;

/// One constant of an enum type, e.g. `java.lang.annotation.ElementType.FIELD`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumConstant {
    /// The enum type.
    pub type_ref: TypeRef,
    /// The constant name.
    pub constant: String,
}

impl EnumConstant {
    /// Creates a constant of `type_ref`.
    #[must_use]
    pub fn new(type_ref: impl Into<TypeRef>, constant: impl Into<String>) -> Self {
        Self {
            type_ref: type_ref.into(),
            constant: constant.into(),
        }
    }

    /// Returns the constant as written in source, e.g. `ElementType.FIELD`.
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{}.{}", self.type_ref.simple_name(), self.constant)
    }
}

/// A short-lived borrow that edits one annotation.
///
/// Obtained from [`AnnotationModel::edit`]. Setters chain:
///
/// ```
/// use marginalia_annotations::AnnotationModel;
/// use marginalia_syntax::SourceUnit;
///
/// let mut unit = SourceUnit::new("org.example");
/// let ty = unit.add_type("Account");
/// let field = unit.add_field(ty, "email", "String").unwrap();
///
/// let model = AnnotationModel::new();
/// let mut view = model.add(&mut unit, field, "Size").unwrap();
/// model
///     .edit(&mut unit, &mut view)
///     .set_literal_value_for("max", "64")
///     .unwrap()
///     .set_string_value_for("message", "too long")
///     .unwrap();
///
/// assert_eq!(
///     view.render(&unit).as_deref(),
///     Some("@Size(max = 64, message = \"too long\")")
/// );
/// ```
#[derive(Debug)]
pub struct AnnotationEditor<'a> {
    model: &'a AnnotationModel,
    unit: &'a mut SourceUnit,
    annotation: &'a mut Annotation,
}

impl<'a> AnnotationEditor<'a> {
    pub(crate) fn new(
        model: &'a AnnotationModel,
        unit: &'a mut SourceUnit,
        annotation: &'a mut Annotation,
    ) -> Self {
        Self {
            model,
            unit,
            annotation,
        }
    }

    /// Returns the view being edited.
    #[must_use]
    pub fn annotation(&self) -> &Annotation {
        self.annotation
    }

    /// Renames the annotation.
    ///
    /// A qualified name is registered as an import and stored in simple form.
    pub fn set_name(&mut self, new_name: impl AsRef<str>) -> Result<&mut Self> {
        let new_name = new_name.as_ref();
        name::validate(new_name)
            .map_err(in_edit_context("set_name", self.annotation.owner()))?;
        let simple = name::simple_form(new_name).to_string();
        let imports: Vec<&str> = if name::is_qualified(new_name) {
            vec![new_name]
        } else {
            Vec::new()
        };
        self.rebuild("set_name", &imports, |current, _| {
            if *current == simple {
                return false;
            }
            *current = simple;
            true
        })
    }

    /// Sets the default element to raw expression text, e.g. `@Retention(RUNTIME)`.
    pub fn set_literal_value(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        self.set_literal_value_for(DEFAULT_KEY, value)
    }

    /// Sets element `key` to raw expression text.
    pub fn set_literal_value_for(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        self.set_element("set_literal_value", key.into(), ElementValue::literal(value), &[])
    }

    /// Sets the default element to a string literal.
    pub fn set_string_value(&mut self, value: &str) -> Result<&mut Self> {
        self.set_string_value_for(DEFAULT_KEY, value)
    }

    /// Sets element `key` to a string literal, quoting and escaping `value`.
    pub fn set_string_value_for(&mut self, key: impl Into<String>, value: &str) -> Result<&mut Self> {
        self.set_element("set_string_value", key.into(), ElementValue::string(value), &[])
    }

    /// Sets the default element to one or more enum constants.
    pub fn set_enum_value(&mut self, constants: &[EnumConstant]) -> Result<&mut Self> {
        self.set_enum_value_for(DEFAULT_KEY, constants)
    }

    /// Sets element `key` to one or more enum constants.
    ///
    /// One constant is written bare, several as an array. An empty slice
    /// writes the empty array `{}`. Each distinct qualified enum type is
    /// registered as an import.
    pub fn set_enum_value_for(
        &mut self,
        key: impl Into<String>,
        constants: &[EnumConstant],
    ) -> Result<&mut Self> {
        let owner = self.annotation.owner();
        for constant in constants {
            name::validate(constant.type_ref.qualified_name())
                .map_err(in_edit_context("set_enum_value", owner))?;
        }

        let value = match constants {
            [single] => ElementValue::literal(single.expression()),
            many => ElementValue::array(many.iter().map(EnumConstant::expression)),
        };
        let mut imports: Vec<&str> = constants
            .iter()
            .map(|constant| constant.type_ref.qualified_name())
            .filter(|qualified| name::is_qualified(qualified))
            .collect();
        imports.sort_unstable();
        imports.dedup();

        self.set_element("set_enum_value", key.into(), value, &imports)
    }

    /// Sets element `key` to an array of raw expressions.
    pub fn set_array_value_for<I, S>(&mut self, key: impl Into<String>, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_element("set_array_value", key.into(), ElementValue::array(values), &[])
    }

    /// Removes element `key`, if present.
    pub fn remove_value(&mut self, key: &str) -> Result<&mut Self> {
        self.rebuild("remove_value", &[], |_, elements| {
            let before = elements.len();
            elements.retain(|element| element.key != key);
            elements.len() != before
        })
    }

    /// Removes every element, leaving a marker annotation.
    pub fn remove_all_values(&mut self) -> Result<&mut Self> {
        self.rebuild("remove_all_values", &[], |_, elements| {
            if elements.is_empty() {
                return false;
            }
            elements.clear();
            true
        })
    }

    fn set_element(
        &mut self,
        operation: &'static str,
        key: String,
        value: ElementValue,
        imports: &[&str],
    ) -> Result<&mut Self> {
        name::validate(&key)
            .map_err(in_edit_context(operation, self.annotation.owner()))?;
        self.rebuild(operation, imports, |_, elements| {
            match elements.iter().position(|element| element.key == key) {
                Some(index) if elements[index].value == value => false,
                Some(index) => {
                    elements[index].value = value;
                    true
                }
                None => {
                    elements.push(Element::new(key, value));
                    true
                }
            }
        })
    }

    /// Applies `change` to a copy of the current node and swaps the copy in.
    ///
    /// `change` returns whether it changed anything; if not, the node keeps
    /// its identity. `imports` are registered whenever the view is live.
    fn rebuild<F>(
        &mut self,
        operation: &'static str,
        imports: &[&str],
        change: F,
    ) -> Result<&mut Self>
    where
        F: FnOnce(&mut String, &mut Vec<Element>) -> bool,
    {
        let owner = self.annotation.owner();
        let old = self.annotation.node_id();
        let model = self.model;
        let capability = model
            .capability(self.annotation.kind())
            .map_err(in_edit_context(operation, owner))?;

        if !self.annotation.belongs_to(self.unit) {
            self.log_mutation(
                operation,
                owner,
                format_args!("skipped, {old:?} is from another unit"),
            );
            return Ok(self);
        }
        let Some(current) = capability
            .sequence(self.unit, owner)
            .map_err(in_edit_context(operation, owner))?
            .iter()
            .filter_map(|modifier| modifier.as_annotation())
            .find(|node| node.id == old)
        else {
            self.log_mutation(operation, owner, format_args!("skipped, {old:?} is stale"));
            return Ok(self);
        };

        let mut node_name = current.name.clone();
        let mut elements = current.elements.clone();
        if !change(&mut node_name, &mut elements) {
            self.register_imports(imports);
            return Ok(self);
        }

        let replacement = self.unit.new_annotation(node_name, elements);
        let new = replacement.id;
        let sequence = capability
            .sequence_mut(self.unit, owner)
            .map_err(in_edit_context(operation, owner))?;
        if capability.replace(sequence, old, replacement).is_none() {
            self.unit.release_node(new);
            let err = Error::internal(format!("{old:?} vanished from {owner}"));
            return Err(in_edit_context(operation, owner)(err));
        }
        self.unit.release_node(old);
        self.annotation.relocate(new);

        self.register_imports(imports);
        self.log_mutation(operation, owner, format_args!("{old:?} -> {new:?}"));
        Ok(self)
    }

    fn register_imports(&mut self, imports: &[&str]) {
        if self.model.config().register_imports {
            for qualified in imports {
                self.unit.register_import(qualified);
            }
        }
    }

    fn log_mutation(&self, operation: &str, owner: DeclId, detail: std::fmt::Arguments<'_>) {
        if self.model.config().log_mutations {
            debug!("{operation} on {owner}: {detail}");
        }
    }
}
