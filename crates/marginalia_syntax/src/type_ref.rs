//! References to named types.

use std::fmt;

use marginalia_foundation::name;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reference to a type by its qualified name, e.g. `java.lang.Override`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeRef {
    qualified: String,
}

impl TypeRef {
    /// Creates a type reference from a qualified (or simple) name.
    #[must_use]
    pub fn new(qualified: impl Into<String>) -> Self {
        Self {
            qualified: qualified.into(),
        }
    }

    /// Returns the qualified name.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified
    }

    /// Returns the simple name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        name::simple_form(&self.qualified)
    }

    /// Returns the namespace, or `""` for a simple name.
    #[must_use]
    pub fn namespace(&self) -> &str {
        name::namespace_of(&self.qualified)
    }
}

impl AsRef<str> for TypeRef {
    fn as_ref(&self) -> &str {
        &self.qualified
    }
}

impl From<&str> for TypeRef {
    fn from(qualified: &str) -> Self {
        Self::new(qualified)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified)
    }
}
