//! Declaration kinds.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The structural kind of a declaration that owns a modifier sequence.
///
/// Each kind stores its modifiers in a differently shaped syntax node, so
/// access to the sequence is provided per kind by a registered capability.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeclarationKind {
    /// Types, methods, fields, and constructors.
    MemberLevel,
    /// Formal parameters of methods and constructors.
    ParameterLevel,
    /// Local variables declared inside a method body.
    LocalVariable,
}

impl DeclarationKind {
    /// All declaration kinds, in declaration order.
    pub const ALL: [DeclarationKind; 3] = [
        DeclarationKind::MemberLevel,
        DeclarationKind::ParameterLevel,
        DeclarationKind::LocalVariable,
    ];

    /// Returns a short lowercase name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MemberLevel => "member",
            Self::ParameterLevel => "parameter",
            Self::LocalVariable => "local-variable",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
