//! Annotation views.
//!
//! An [`Annotation`] is a handle to one annotation occurrence. It holds the
//! unit it was taken from, the owning declaration (an index, so it keeps
//! nothing alive), a locator for the underlying node, and the declaration
//! kind whose capability splices edits back. Structural edits replace the node and then move the locator,
//! so the handle the caller holds keeps referring to the same annotation.

use marginalia_foundation::{DeclId, DeclarationKind, NodeId, UnitId, name};
use marginalia_syntax::{AnnotationNode, Element, ElementValue, SourceUnit};

/// A stable handle to one annotation on a declaration.
///
/// Two views are equal iff they locate the same node occurrence in the
/// same unit. A view resolves nothing in any other unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Annotation {
    unit: UnitId,
    owner: DeclId,
    node: NodeId,
    kind: DeclarationKind,
}

impl Annotation {
    pub(crate) fn new(unit: UnitId, owner: DeclId, node: NodeId, kind: DeclarationKind) -> Self {
        Self {
            unit,
            owner,
            node,
            kind,
        }
    }

    /// Returns the unit this view was taken from.
    #[must_use]
    pub fn unit(&self) -> UnitId {
        self.unit
    }

    /// Returns true if this view was taken from `unit`.
    #[must_use]
    pub fn belongs_to(&self, unit: &SourceUnit) -> bool {
        self.unit == unit.id()
    }

    /// Returns the declaration this annotation is attached to.
    #[must_use]
    pub fn owner(&self) -> DeclId {
        self.owner
    }

    /// Returns the id of the node this view currently locates.
    #[must_use]
    pub fn node_id(&self) -> NodeId {
        self.node
    }

    /// Returns the declaration kind used to splice edits.
    #[must_use]
    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    pub(crate) fn relocate(&mut self, node: NodeId) {
        self.node = node;
    }

    /// Resolves the underlying node.
    ///
    /// Returns `None` if the node is no longer on its declaration or if
    /// `unit` is not the unit the view was taken from.
    #[must_use]
    pub fn node<'u>(&self, unit: &'u SourceUnit) -> Option<&'u AnnotationNode> {
        if !self.belongs_to(unit) {
            return None;
        }
        unit.declaration(self.owner)
            .ok()?
            .modifiers()
            .iter()
            .filter_map(|modifier| modifier.as_annotation())
            .find(|node| node.id == self.node)
    }

    /// Returns true if the underlying node is still on its declaration.
    #[must_use]
    pub fn is_live(&self, unit: &SourceUnit) -> bool {
        self.node(unit).is_some()
    }

    /// Returns the name as stored on the node.
    #[must_use]
    pub fn name<'u>(&self, unit: &'u SourceUnit) -> Option<&'u str> {
        self.node(unit).map(|node| node.name.as_str())
    }

    /// Returns the qualified name, resolved through the unit's imports.
    ///
    /// Falls back to the stored name when no unique import matches.
    #[must_use]
    pub fn qualified_name(&self, unit: &SourceUnit) -> Option<String> {
        let stored = self.name(unit)?;
        if name::is_qualified(stored) {
            return Some(stored.to_string());
        }
        Some(unit.resolve_simple(stored).unwrap_or(stored).to_string())
    }

    /// Returns all elements, in source order.
    #[must_use]
    pub fn values<'u>(&self, unit: &'u SourceUnit) -> Option<&'u [Element]> {
        self.node(unit).map(|node| node.elements.as_slice())
    }

    /// Returns the element named `key`.
    #[must_use]
    pub fn value<'u>(&self, unit: &'u SourceUnit, key: &str) -> Option<&'u ElementValue> {
        self.node(unit)?.element(key)
    }

    /// Returns the raw text of the literal element named `key`.
    #[must_use]
    pub fn literal_value<'u>(&self, unit: &'u SourceUnit, key: &str) -> Option<&'u str> {
        self.value(unit, key)?.as_literal()
    }

    /// Returns the unquoted contents of the string element named `key`.
    #[must_use]
    pub fn string_value(&self, unit: &SourceUnit, key: &str) -> Option<String> {
        self.value(unit, key)?.as_string()
    }

    /// Returns true if the annotation has no elements.
    #[must_use]
    pub fn is_marker(&self, unit: &SourceUnit) -> bool {
        self.node(unit).is_some_and(AnnotationNode::is_marker)
    }

    /// Returns true if the annotation has only the default element.
    #[must_use]
    pub fn is_single_value(&self, unit: &SourceUnit) -> bool {
        self.node(unit).is_some_and(AnnotationNode::is_single_value)
    }

    /// Returns true if the annotation has named elements.
    #[must_use]
    pub fn is_normal(&self, unit: &SourceUnit) -> bool {
        self.node(unit).is_some_and(AnnotationNode::is_normal)
    }

    /// Renders the annotation as source text, e.g. `@Size(min = 1)`.
    #[must_use]
    pub fn render(&self, unit: &SourceUnit) -> Option<String> {
        self.node(unit).map(ToString::to_string)
    }
}
