//! Plain modifier keywords.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A keyword-like modifier such as `public` or `static`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Keyword {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `static`
    Static,
    /// `final`
    Final,
    /// `abstract`
    Abstract,
    /// `native`
    Native,
    /// `synchronized`
    Synchronized,
    /// `transient`
    Transient,
    /// `volatile`
    Volatile,
    /// `strictfp`
    Strictfp,
    /// `default`
    Default,
}

impl Keyword {
    /// All keywords, in conventional source order.
    pub const ALL: [Keyword; 12] = [
        Keyword::Public,
        Keyword::Protected,
        Keyword::Private,
        Keyword::Abstract,
        Keyword::Default,
        Keyword::Static,
        Keyword::Final,
        Keyword::Transient,
        Keyword::Volatile,
        Keyword::Synchronized,
        Keyword::Native,
        Keyword::Strictfp,
    ];

    /// Returns the source text of this keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Static => "static",
            Self::Final => "final",
            Self::Abstract => "abstract",
            Self::Native => "native",
            Self::Synchronized => "synchronized",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Strictfp => "strictfp",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing text that is not a modifier keyword.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown modifier keyword: {0:?}")]
pub struct UnknownKeyword(pub String);

impl FromStr for Keyword {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.as_str() == s)
            .ok_or_else(|| UnknownKeyword(s.to_string()))
    }
}
