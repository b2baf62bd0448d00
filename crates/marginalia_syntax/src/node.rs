//! Modifier entries and annotation nodes.

use std::fmt;

use marginalia_foundation::NodeId;

use crate::element::{DEFAULT_KEY, Element, ElementValue};
use crate::keyword::Keyword;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The ordered modifier sequence of one declaration, in source order.
pub type ModifierList = Vec<Modifier>;

/// One annotation occurrence in a modifier sequence.
///
/// The name and elements of a node are never changed in place by the
/// annotation model: an edit builds a new node with a fresh [`NodeId`] and
/// splices it where the old one was.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotationNode {
    /// Identity of this occurrence.
    pub id: NodeId,
    /// Annotation name as written in source (usually the simple form).
    pub name: String,
    /// Element values, in source order.
    pub elements: Vec<Element>,
}

impl AnnotationNode {
    /// Returns true if this annotation has no elements (`@A`).
    #[must_use]
    pub fn is_marker(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns true if this annotation has only the default element (`@A(x)`).
    #[must_use]
    pub fn is_single_value(&self) -> bool {
        matches!(self.elements.as_slice(), [only] if only.key == DEFAULT_KEY)
    }

    /// Returns true if this annotation has named elements (`@A(k = v)`).
    #[must_use]
    pub fn is_normal(&self) -> bool {
        !self.is_marker() && !self.is_single_value()
    }

    /// Returns the value of the element named `key`.
    #[must_use]
    pub fn element(&self, key: &str) -> Option<&ElementValue> {
        self.elements
            .iter()
            .find(|element| element.key == key)
            .map(|element| &element.value)
    }
}

impl fmt::Display for AnnotationNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if self.is_marker() {
            return Ok(());
        }
        if self.is_single_value() {
            return write!(f, "({})", self.elements[0].value);
        }
        f.write_str("(")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str(")")
    }
}

/// An entry in a declaration's modifier sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Modifier {
    /// A keyword modifier such as `public`.
    Plain(Keyword),
    /// An annotation.
    Marker(AnnotationNode),
}

impl Modifier {
    /// Returns true if this entry is an annotation.
    #[must_use]
    pub fn is_annotation(&self) -> bool {
        matches!(self, Self::Marker(_))
    }

    /// Returns the annotation node, if this entry is one.
    #[must_use]
    pub fn as_annotation(&self) -> Option<&AnnotationNode> {
        match self {
            Self::Marker(node) => Some(node),
            Self::Plain(_) => None,
        }
    }

    /// Returns the node id if this entry is an annotation.
    #[must_use]
    pub fn node_id(&self) -> Option<NodeId> {
        self.as_annotation().map(|node| node.id)
    }

    /// Returns the keyword, if this entry is a plain modifier.
    #[must_use]
    pub fn as_keyword(&self) -> Option<Keyword> {
        match self {
            Self::Plain(keyword) => Some(*keyword),
            Self::Marker(_) => None,
        }
    }
}

impl From<Keyword> for Modifier {
    fn from(keyword: Keyword) -> Self {
        Self::Plain(keyword)
    }
}

impl From<AnnotationNode> for Modifier {
    fn from(node: AnnotationNode) -> Self {
        Self::Marker(node)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(keyword) => write!(f, "{keyword}"),
            Self::Marker(node) => write!(f, "{node}"),
        }
    }
}

/// Renders a modifier sequence as source text, space separated.
#[must_use]
pub fn render_modifiers(modifiers: &[Modifier]) -> String {
    modifiers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
