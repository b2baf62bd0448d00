//! Annotation element values.
//!
//! Element values are kept as source expression text. String values are
//! stored quoted and escaped, exactly as they would appear in source.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key used by single-member annotations such as `@Retention(RUNTIME)`.
pub const DEFAULT_KEY: &str = "value";

/// The value of one annotation element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementValue {
    /// Raw expression text, e.g. `42`, `"text"`, `ElementType.FIELD`.
    Literal(String),
    /// Array initializer, e.g. `{ElementType.FIELD, ElementType.METHOD}`.
    Array(Vec<ElementValue>),
}

impl ElementValue {
    /// Creates a literal value from raw expression text.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Creates a string literal value, quoting and escaping `text`.
    #[must_use]
    pub fn string(text: &str) -> Self {
        Self::Literal(enquote(text))
    }

    /// Creates an array of raw literals.
    #[must_use]
    pub fn array<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Array(items.into_iter().map(Self::literal).collect())
    }

    /// Returns the raw text if this is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            Self::Array(_) => None,
        }
    }

    /// Returns the unquoted contents if this is a string literal.
    #[must_use]
    pub fn as_string(&self) -> Option<String> {
        self.as_literal().and_then(unquote)
    }

    /// Returns the items if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[ElementValue]> {
        match self {
            Self::Array(items) => Some(items),
            Self::Literal(_) => None,
        }
    }
}

impl fmt::Display for ElementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Array(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// One `key = value` pair of an annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    /// Element name.
    pub key: String,
    /// Element value.
    pub value: ElementValue,
}

impl Element {
    /// Creates a new element.
    #[must_use]
    pub fn new(key: impl Into<String>, value: ElementValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

/// Quotes `text` as a string literal, escaping special characters.
#[must_use]
pub fn enquote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Reverses [`enquote`]. Returns `None` if `literal` is not a quoted string.
#[must_use]
pub fn unquote(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            other => out.push(other),
        }
    }
    Some(out)
}
