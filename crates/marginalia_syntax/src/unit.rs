//! Source units.
//!
//! A `SourceUnit` owns everything parsed from one source file: its
//! declarations, the identities of its annotation nodes, and its imports.
//! Declarations live as long as the unit; nothing here destroys them.

// Allow usize to u32 casts - declaration counts stay far below u32::MAX
#![allow(clippy::cast_possible_truncation)]

use marginalia_foundation::{DeclId, DeclarationKind, Error, NodeId, Result, UnitId};

use crate::declaration::{Declaration, LocalVariableDecl, MemberDecl, MemberKind, ParameterDecl};
use crate::element::Element;
use crate::imports::ImportSet;
use crate::keyword::Keyword;
use crate::node::{AnnotationNode, Modifier, ModifierList};
use crate::node_store::NodeStore;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One parsed source file.
///
/// Each unit, including each clone, gets its own [`UnitId`], so ids handed
/// out by one unit never resolve in another.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceUnit {
    #[cfg_attr(feature = "serde", serde(skip, default = "UnitId::fresh"))]
    id: UnitId,
    package: Option<String>,
    imports: ImportSet,
    declarations: Vec<Declaration>,
    nodes: NodeStore,
}

impl Default for SourceUnit {
    /// Creates an empty unit in the default package.
    fn default() -> Self {
        Self {
            id: UnitId::fresh(),
            package: None,
            imports: ImportSet::default(),
            declarations: Vec::new(),
            nodes: NodeStore::default(),
        }
    }
}

impl Clone for SourceUnit {
    /// Copies the contents under a fresh [`UnitId`].
    fn clone(&self) -> Self {
        Self {
            id: UnitId::fresh(),
            package: self.package.clone(),
            imports: self.imports.clone(),
            declarations: self.declarations.clone(),
            nodes: self.nodes.clone(),
        }
    }
}

impl SourceUnit {
    /// Creates an empty unit in the given package.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            ..Self::default()
        }
    }

    /// Returns the identity of this unit.
    #[must_use]
    pub fn id(&self) -> UnitId {
        self.id
    }

    /// Returns the package, or `None` for the default package.
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    // =========================================================================
    // Imports
    // =========================================================================

    /// Registers `qualified` as imported by this unit.
    ///
    /// Idempotent: returns `true` only the first time a name is registered.
    /// A name whose simple form clashes with an existing import is still
    /// registered, with a warning.
    pub fn register_import(&mut self, qualified: &str) -> bool {
        if self.imports.contains(qualified) {
            return false;
        }
        if let Some(existing) = self.imports.collision_with(qualified) {
            log::warn!(
                "import {qualified} has the same simple name as existing import {existing}"
            );
        }
        log::trace!("registering import {qualified}");
        self.imports.insert(qualified)
    }

    /// Returns true if `qualified` is imported.
    #[must_use]
    pub fn has_import(&self, qualified: &str) -> bool {
        self.imports.contains(qualified)
    }

    /// Returns the imports of this unit.
    #[must_use]
    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    /// Returns the unique imported qualified name with the simple form `simple`.
    #[must_use]
    pub fn resolve_simple(&self, simple: &str) -> Option<&str> {
        self.imports.resolve_simple(simple)
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// Adds a top-level type.
    pub fn add_type(&mut self, name: impl Into<String>) -> DeclId {
        let decl = MemberDecl::new(MemberKind::Type, name.into(), None, None);
        self.push_declaration(Declaration::Member(decl))
    }

    /// Adds a method to the type `owner`.
    pub fn add_method(&mut self, owner: DeclId, name: impl Into<String>) -> Result<DeclId> {
        self.add_member(owner, MemberKind::Method, name.into(), None)
    }

    /// Adds a field of type `type_name` to the type `owner`.
    pub fn add_field(
        &mut self,
        owner: DeclId,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Result<DeclId> {
        self.add_member(owner, MemberKind::Field, name.into(), Some(type_name.into()))
    }

    /// Adds a constructor to the type `owner`. It takes the owner's name.
    pub fn add_constructor(&mut self, owner: DeclId) -> Result<DeclId> {
        let name = self.member(owner)?.name.clone();
        self.add_member(owner, MemberKind::Constructor, name, None)
    }

    /// Adds a formal parameter to the method or constructor `method`.
    pub fn add_parameter(
        &mut self,
        method: DeclId,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Result<DeclId> {
        self.member(method)?;
        let id = self.push_declaration(Declaration::Parameter(ParameterDecl {
            name: name.into(),
            type_name: type_name.into(),
            owner: method,
            modifiers: ModifierList::new(),
        }));
        self.member_mut(method)?.parameters.push(id);
        Ok(id)
    }

    /// Adds a local variable to the body of `method`.
    pub fn add_local_variable(
        &mut self,
        method: DeclId,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Result<DeclId> {
        self.member(method)?;
        let id = self.push_declaration(Declaration::LocalVariable(LocalVariableDecl {
            name: name.into(),
            type_name: type_name.into(),
            owner: method,
            modifiers: ModifierList::new(),
        }));
        self.member_mut(method)?.locals.push(id);
        Ok(id)
    }

    /// Returns the declaration with the given id.
    pub fn declaration(&self, id: DeclId) -> Result<&Declaration> {
        self.declarations
            .get(id.index() as usize)
            .ok_or_else(|| Error::declaration_not_found(id))
    }

    /// Returns the declaration with the given id, mutably.
    pub fn declaration_mut(&mut self, id: DeclId) -> Result<&mut Declaration> {
        self.declarations
            .get_mut(id.index() as usize)
            .ok_or_else(|| Error::declaration_not_found(id))
    }

    /// Iterates over all declarations in creation order.
    pub fn declarations(&self) -> impl Iterator<Item = (DeclId, &Declaration)> + '_ {
        self.declarations
            .iter()
            .enumerate()
            .map(|(idx, decl)| (DeclId(idx as u32), decl))
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
    }

    /// Returns the members declared inside the type `owner`.
    pub fn members_of(&self, owner: DeclId) -> Result<&[DeclId]> {
        Ok(&self.member(owner)?.members)
    }

    /// Returns the parameters of `method`.
    pub fn parameters_of(&self, method: DeclId) -> Result<&[DeclId]> {
        Ok(&self.member(method)?.parameters)
    }

    /// Returns the local variables of `method`.
    pub fn locals_of(&self, method: DeclId) -> Result<&[DeclId]> {
        Ok(&self.member(method)?.locals)
    }

    // =========================================================================
    // Modifiers and annotation nodes
    // =========================================================================

    /// Appends a modifier at the end of a declaration's sequence.
    ///
    /// This is parser order: no insertion rule, no import registration.
    pub fn push_modifier(&mut self, decl: DeclId, modifier: impl Into<Modifier>) -> Result<()> {
        self.declaration_mut(decl)?
            .modifiers_mut()
            .push(modifier.into());
        Ok(())
    }

    /// Appends a keyword modifier.
    pub fn push_keyword(&mut self, decl: DeclId, keyword: Keyword) -> Result<()> {
        self.push_modifier(decl, keyword)
    }

    /// Appends a marker annotation named `name`, returning its node id.
    pub fn push_annotation(&mut self, decl: DeclId, name: impl Into<String>) -> Result<NodeId> {
        self.declaration(decl)?;
        let node = self.new_annotation(name, Vec::new());
        let id = node.id;
        self.push_modifier(decl, node)?;
        Ok(id)
    }

    /// Constructs a new annotation node with a fresh identity.
    ///
    /// The node is not attached to any declaration.
    pub fn new_annotation(&mut self, name: impl Into<String>, elements: Vec<Element>) -> AnnotationNode {
        AnnotationNode {
            id: self.nodes.allocate(),
            name: name.into(),
            elements,
        }
    }

    /// Retires a node id so it never resolves again.
    ///
    /// Returns `false` if the id was not live.
    pub fn release_node(&mut self, id: NodeId) -> bool {
        self.nodes.release(id)
    }

    /// Returns true if `id` identifies a node that has not been released.
    #[must_use]
    pub fn is_live(&self, id: NodeId) -> bool {
        self.nodes.is_live(id)
    }

    /// Returns the number of live annotation nodes.
    #[must_use]
    pub fn live_node_count(&self) -> usize {
        self.nodes.len()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn push_declaration(&mut self, decl: Declaration) -> DeclId {
        let id = DeclId(self.declarations.len() as u32);
        self.declarations.push(decl);
        id
    }

    fn add_member(
        &mut self,
        owner: DeclId,
        kind: MemberKind,
        name: String,
        type_name: Option<String>,
    ) -> Result<DeclId> {
        self.member(owner)?;
        let decl = MemberDecl::new(kind, name, type_name, Some(owner));
        let id = self.push_declaration(Declaration::Member(decl));
        self.member_mut(owner)?.members.push(id);
        Ok(id)
    }

    fn member(&self, id: DeclId) -> Result<&MemberDecl> {
        match self.declaration(id)? {
            Declaration::Member(member) => Ok(member),
            other => Err(Error::kind_mismatch(DeclarationKind::MemberLevel, other.kind())),
        }
    }

    fn member_mut(&mut self, id: DeclId) -> Result<&mut MemberDecl> {
        match self.declaration_mut(id)? {
            Declaration::Member(member) => Ok(member),
            other => Err(Error::kind_mismatch(DeclarationKind::MemberLevel, other.kind())),
        }
    }
}
