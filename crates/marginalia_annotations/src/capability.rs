//! Modifier list capabilities.
//!
//! A capability gives access to the modifier sequence of one declaration
//! kind and splices replacement annotation nodes into it. The annotation
//! model never matches on declaration payloads itself; it asks the
//! [`CapabilityRegistry`] for the capability of the declaration's kind.
//!
//! Supporting a new kind means implementing [`ModifierListCapability`] and
//! registering it. Model call sites do not change.

use std::collections::HashMap;
use std::fmt;

use marginalia_foundation::{DeclId, DeclarationKind, Error, NodeId, Result};
use marginalia_syntax::{AnnotationNode, Declaration, Modifier, ModifierList, SourceUnit};

/// Per-kind access to a declaration's modifier sequence.
///
/// `sequence` and `sequence_mut` must return the list stored in the
/// declaration itself, so that a change made through one handle is seen by
/// every handle obtained later.
pub trait ModifierListCapability: fmt::Debug {
    /// The declaration kind this capability serves.
    fn kind(&self) -> DeclarationKind;

    /// Returns the modifier sequence of `decl`.
    ///
    /// Fails if `decl` does not exist or is of another kind.
    fn sequence<'u>(&self, unit: &'u SourceUnit, decl: DeclId) -> Result<&'u ModifierList>;

    /// Returns the modifier sequence of `decl`, mutably.
    ///
    /// Fails if `decl` does not exist or is of another kind.
    fn sequence_mut<'u>(
        &self,
        unit: &'u mut SourceUnit,
        decl: DeclId,
    ) -> Result<&'u mut ModifierList>;

    /// Puts `new` at the position of the annotation node `old`.
    ///
    /// Returns the displaced node, or `None` if `old` is not in `sequence`,
    /// in which case `sequence` is left untouched.
    fn replace(
        &self,
        sequence: &mut ModifierList,
        old: NodeId,
        new: AnnotationNode,
    ) -> Option<AnnotationNode> {
        let slot = sequence.iter_mut().find_map(|modifier| match modifier {
            Modifier::Marker(node) if node.id == old => Some(node),
            Modifier::Marker(_) | Modifier::Plain(_) => None,
        })?;
        Some(std::mem::replace(slot, new))
    }
}

/// Modifier access for types, methods, fields, and constructors.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemberModifiers;

impl ModifierListCapability for MemberModifiers {
    fn kind(&self) -> DeclarationKind {
        DeclarationKind::MemberLevel
    }

    fn sequence<'u>(&self, unit: &'u SourceUnit, decl: DeclId) -> Result<&'u ModifierList> {
        match unit.declaration(decl)? {
            Declaration::Member(member) => Ok(&member.modifiers),
            other => Err(Error::kind_mismatch(self.kind(), other.kind())),
        }
    }

    fn sequence_mut<'u>(
        &self,
        unit: &'u mut SourceUnit,
        decl: DeclId,
    ) -> Result<&'u mut ModifierList> {
        match unit.declaration_mut(decl)? {
            Declaration::Member(member) => Ok(&mut member.modifiers),
            other => Err(Error::kind_mismatch(self.kind(), other.kind())),
        }
    }
}

/// Modifier access for formal parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParameterModifiers;

impl ModifierListCapability for ParameterModifiers {
    fn kind(&self) -> DeclarationKind {
        DeclarationKind::ParameterLevel
    }

    fn sequence<'u>(&self, unit: &'u SourceUnit, decl: DeclId) -> Result<&'u ModifierList> {
        match unit.declaration(decl)? {
            Declaration::Parameter(parameter) => Ok(&parameter.modifiers),
            other => Err(Error::kind_mismatch(self.kind(), other.kind())),
        }
    }

    fn sequence_mut<'u>(
        &self,
        unit: &'u mut SourceUnit,
        decl: DeclId,
    ) -> Result<&'u mut ModifierList> {
        match unit.declaration_mut(decl)? {
            Declaration::Parameter(parameter) => Ok(&mut parameter.modifiers),
            other => Err(Error::kind_mismatch(self.kind(), other.kind())),
        }
    }
}

/// Capabilities keyed by declaration kind.
#[derive(Debug)]
pub struct CapabilityRegistry {
    capabilities: HashMap<DeclarationKind, Box<dyn ModifierListCapability>>,
}

impl Default for CapabilityRegistry {
    /// Registers [`MemberModifiers`] and [`ParameterModifiers`].
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(MemberModifiers);
        registry.register(ParameterModifiers);
        registry
    }
}

impl CapabilityRegistry {
    /// Creates a registry with no capabilities.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            capabilities: HashMap::new(),
        }
    }

    /// Registers `capability` for its kind, replacing any previous one.
    ///
    /// Returns the replaced capability.
    pub fn register<C>(&mut self, capability: C) -> Option<Box<dyn ModifierListCapability>>
    where
        C: ModifierListCapability + 'static,
    {
        self.capabilities
            .insert(capability.kind(), Box::new(capability))
    }

    /// Returns the capability registered for `kind`.
    ///
    /// Fails with `UnsupportedDeclarationKind` if there is none.
    pub fn get(&self, kind: DeclarationKind) -> Result<&dyn ModifierListCapability> {
        self.capabilities
            .get(&kind)
            .map(Box::as_ref)
            .ok_or_else(|| Error::unsupported_kind(kind))
    }

    /// Returns true if a capability is registered for `kind`.
    #[must_use]
    pub fn is_registered(&self, kind: DeclarationKind) -> bool {
        self.capabilities.contains_key(&kind)
    }

    /// Returns the registered kinds, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<DeclarationKind> {
        let mut kinds: Vec<_> = self.capabilities.keys().copied().collect();
        kinds.sort();
        kinds
    }
}
