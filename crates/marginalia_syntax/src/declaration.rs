//! Declaration nodes.
//!
//! Each declaration kind keeps its modifier sequence in its own payload
//! struct. Generic code reads modifiers through [`Declaration::modifiers`];
//! mutation is done per kind by matching on the variant.

use std::fmt;

use marginalia_foundation::{DeclId, DeclarationKind};

use crate::node::{Modifier, ModifierList};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a member-level declaration declares.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MemberKind {
    /// A class, interface, enum, or annotation type.
    Type,
    /// A method.
    Method,
    /// A field.
    Field,
    /// A constructor.
    Constructor,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Type => "type",
            Self::Method => "method",
            Self::Field => "field",
            Self::Constructor => "constructor",
        };
        f.write_str(name)
    }
}

/// A type, method, field, or constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemberDecl {
    /// What this member declares.
    pub kind: MemberKind,
    /// Declared name.
    pub name: String,
    /// Field type; `None` for types, methods, and constructors.
    pub type_name: Option<String>,
    /// Enclosing type, `None` for top-level types.
    pub owner: Option<DeclId>,
    /// Modifier sequence.
    pub modifiers: ModifierList,
    /// Members declared inside this type.
    pub members: Vec<DeclId>,
    /// Formal parameters of this method or constructor.
    pub parameters: Vec<DeclId>,
    /// Local variables declared in this method or constructor body.
    pub locals: Vec<DeclId>,
}

impl MemberDecl {
    pub(crate) fn new(
        kind: MemberKind,
        name: String,
        type_name: Option<String>,
        owner: Option<DeclId>,
    ) -> Self {
        Self {
            kind,
            name,
            type_name,
            owner,
            modifiers: ModifierList::new(),
            members: Vec::new(),
            parameters: Vec::new(),
            locals: Vec::new(),
        }
    }
}

/// A formal parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParameterDecl {
    /// Parameter name.
    pub name: String,
    /// Declared type.
    pub type_name: String,
    /// Method or constructor declaring this parameter.
    pub owner: DeclId,
    /// Modifier sequence.
    pub modifiers: ModifierList,
}

/// A local variable inside a method or constructor body.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalVariableDecl {
    /// Variable name.
    pub name: String,
    /// Declared type.
    pub type_name: String,
    /// Method or constructor whose body declares this variable.
    pub owner: DeclId,
    /// Modifier sequence.
    pub modifiers: ModifierList,
}

/// Any declaration that owns a modifier sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Declaration {
    /// Type, method, field, or constructor.
    Member(MemberDecl),
    /// Formal parameter.
    Parameter(ParameterDecl),
    /// Local variable.
    LocalVariable(LocalVariableDecl),
}

impl Declaration {
    /// Returns the structural kind of this declaration.
    #[must_use]
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Self::Member(_) => DeclarationKind::MemberLevel,
            Self::Parameter(_) => DeclarationKind::ParameterLevel,
            Self::LocalVariable(_) => DeclarationKind::LocalVariable,
        }
    }

    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Member(member) => &member.name,
            Self::Parameter(parameter) => &parameter.name,
            Self::LocalVariable(local) => &local.name,
        }
    }

    /// Returns the enclosing declaration, if any.
    #[must_use]
    pub fn owner(&self) -> Option<DeclId> {
        match self {
            Self::Member(member) => member.owner,
            Self::Parameter(parameter) => Some(parameter.owner),
            Self::LocalVariable(local) => Some(local.owner),
        }
    }

    /// Returns the modifier sequence, read-only.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        match self {
            Self::Member(member) => &member.modifiers,
            Self::Parameter(parameter) => &parameter.modifiers,
            Self::LocalVariable(local) => &local.modifiers,
        }
    }

    /// Returns the member payload, if this is a member-level declaration.
    #[must_use]
    pub fn as_member(&self) -> Option<&MemberDecl> {
        match self {
            Self::Member(member) => Some(member),
            _ => None,
        }
    }

    pub(crate) fn modifiers_mut(&mut self) -> &mut ModifierList {
        match self {
            Self::Member(member) => &mut member.modifiers,
            Self::Parameter(parameter) => &mut parameter.modifiers,
            Self::LocalVariable(local) => &mut local.modifiers,
        }
    }
}
