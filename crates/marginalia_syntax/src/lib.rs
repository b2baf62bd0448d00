//! Source units, declarations, modifiers, and annotation nodes for Marginalia.
//!
//! This crate is the syntax node store the annotation model works against.
//! It is not a parser: units are built programmatically, in parser order.
//!
//! This crate provides:
//! - [`SourceUnit`] - Declarations, node identities, and imports of one file
//! - [`Declaration`] - Member, parameter, and local variable declarations
//! - [`Modifier`] - Plain keywords and annotation nodes, in source order
//! - [`AnnotationNode`] - One annotation occurrence with its elements
//! - [`ImportSet`] - Qualified names imported by a unit
//! - [`TypeRef`] - A reference to a type by qualified name

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod declaration;
pub mod element;
pub mod imports;
pub mod keyword;
pub mod node;
pub mod node_store;
pub mod type_ref;
pub mod unit;

pub use declaration::{Declaration, LocalVariableDecl, MemberDecl, MemberKind, ParameterDecl};
pub use element::{DEFAULT_KEY, Element, ElementValue};
pub use imports::ImportSet;
pub use keyword::{Keyword, UnknownKeyword};
pub use node::{AnnotationNode, Modifier, ModifierList, render_modifiers};
pub use node_store::NodeStore;
pub use type_ref::TypeRef;
pub use unit::SourceUnit;
