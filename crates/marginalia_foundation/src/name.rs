//! Qualified and simple name handling.
//!
//! Names are dotted paths such as `org.example.Override`. The last segment is
//! the simple form; everything before the last `.` is the namespace. All
//! functions here are pure.

use crate::error::{Error, Result};

/// Separator between namespace segments.
pub const SEPARATOR: char = '.';

/// Returns true if `name` contains a namespace part.
#[must_use]
pub fn is_qualified(name: &str) -> bool {
    name.contains(SEPARATOR)
}

/// Returns the simple form of `name` (the last segment).
///
/// Returns `name` unchanged if it is already simple.
#[must_use]
pub fn simple_form(name: &str) -> &str {
    name.rsplit_once(SEPARATOR).map_or(name, |(_, simple)| simple)
}

/// Returns the namespace of `name`, or `""` if it is simple.
#[must_use]
pub fn namespace_of(name: &str) -> &str {
    name.rsplit_once(SEPARATOR).map_or("", |(namespace, _)| namespace)
}

/// Returns true if `a` and `b` denote the same name.
///
/// Names match when they are textually identical, or when one is qualified
/// and the other is its simple form. Two names qualified with different
/// namespaces never match, even when their simple forms agree.
#[must_use]
pub fn equivalent(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    if is_qualified(a) && is_qualified(b) {
        return false;
    }
    simple_form(a) == simple_form(b)
}

/// Checks that `name` is usable as an annotation or type name.
///
/// Rejects the empty name, empty segments (`a..B`, `.A`, `A.`), and
/// segments containing whitespace.
pub fn validate(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_name(name));
    }
    let valid = name
        .split(SEPARATOR)
        .all(|segment| !segment.is_empty() && !segment.chars().any(char::is_whitespace));
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_name(name))
    }
}
