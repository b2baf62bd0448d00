//! Import registrations of a source unit.

use im::OrdSet;
use marginalia_foundation::name;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The set of qualified names imported by a source unit.
///
/// Iteration is in sorted order. Cloning is cheap (structural sharing), so
/// callers can take snapshots freely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImportSet {
    names: OrdSet<String>,
}

impl ImportSet {
    /// Creates an empty import set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `qualified` to the set.
    ///
    /// Returns `true` if it was not present before.
    pub fn insert(&mut self, qualified: &str) -> bool {
        if self.names.contains(qualified) {
            return false;
        }
        self.names.insert(qualified.to_string());
        true
    }

    /// Returns true if `qualified` is in the set.
    #[must_use]
    pub fn contains(&self, qualified: &str) -> bool {
        self.names.contains(qualified)
    }

    /// Returns the imported name whose simple form is `simple`.
    ///
    /// Returns `None` when nothing matches or when the match is ambiguous.
    #[must_use]
    pub fn resolve_simple(&self, simple: &str) -> Option<&str> {
        let mut matches = self
            .names
            .iter()
            .filter(|qualified| name::simple_form(qualified.as_str()) == simple);
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first.as_str())
    }

    /// Returns an imported name with the same simple form as `qualified` but
    /// a different namespace.
    #[must_use]
    pub fn collision_with(&self, qualified: &str) -> Option<&str> {
        let simple = name::simple_form(qualified);
        self.names
            .iter()
            .find(|existing| {
                existing.as_str() != qualified && name::simple_form(existing.as_str()) == simple
            })
            .map(String::as_str)
    }

    /// Returns the number of imports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing is imported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over imported names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}
