//! The annotation model.
//!
//! `AnnotationModel` implements add, list, find, has, and remove over any
//! declaration whose kind has a registered capability. Mutations read the
//! declaration's modifier sequence through the capability, splice it, and
//! are done: the sequence is the declaration's own list, so there is no
//! separate commit step.
//!
//! # Example
//!
//! ```
//! use marginalia_annotations::AnnotationModel;
//! use marginalia_syntax::{Keyword, SourceUnit, render_modifiers};
//!
//! let mut unit = SourceUnit::new("org.example");
//! let ty = unit.add_type("Greeter");
//! let method = unit.add_method(ty, "greet").unwrap();
//! unit.push_keyword(method, Keyword::Public).unwrap();
//!
//! let model = AnnotationModel::new();
//! model.add(&mut unit, method, "java.lang.Override").unwrap();
//!
//! assert!(model.has(&unit, method, "Override").unwrap());
//! assert!(unit.has_import("java.lang.Override"));
//! let modifiers = unit.declaration(method).unwrap().modifiers();
//! assert_eq!(render_modifiers(modifiers), "@Override public");
//! ```

use log::{debug, trace};
use marginalia_foundation::{DeclId, DeclarationKind, Error, ErrorContext, Result, name};
use marginalia_syntax::{Modifier, SourceUnit, TypeRef};

use crate::capability::{CapabilityRegistry, ModifierListCapability};
use crate::config::ModelConfig;
use crate::editor::AnnotationEditor;
use crate::view::Annotation;

/// Returns where a new annotation goes in `modifiers`.
///
/// That is right after the run of annotations at the head of the sequence,
/// or the head itself when the sequence is empty or starts with a keyword.
#[must_use]
pub fn insertion_index(modifiers: &[Modifier]) -> usize {
    modifiers
        .iter()
        .take_while(|modifier| modifier.is_annotation())
        .count()
}

/// Adds, finds, and removes annotations on declarations.
#[derive(Debug, Default)]
pub struct AnnotationModel {
    registry: CapabilityRegistry,
    config: ModelConfig,
}

impl AnnotationModel {
    /// Creates a model with the default capabilities and configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model with the default capabilities and the given configuration.
    #[must_use]
    pub fn with_config(config: ModelConfig) -> Self {
        Self {
            registry: CapabilityRegistry::default(),
            config,
        }
    }

    /// Builder method to replace the capability registry.
    #[must_use]
    pub fn with_registry(mut self, registry: CapabilityRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Returns the capability registry.
    #[must_use]
    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    /// Returns the capability registry, for registering more kinds.
    pub fn registry_mut(&mut self) -> &mut CapabilityRegistry {
        &mut self.registry
    }

    /// Returns the capability for `kind`.
    ///
    /// Fails with `UnsupportedDeclarationKind` if none is registered.
    pub fn capability(&self, kind: DeclarationKind) -> Result<&dyn ModifierListCapability> {
        self.registry.get(kind)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Adds an annotation named `name` to `decl`.
    ///
    /// The new annotation goes right after the leading run of annotations.
    /// A qualified name is registered as an import of `unit` and stored in
    /// simple form; a simple name is stored as given.
    pub fn add(
        &self,
        unit: &mut SourceUnit,
        decl: DeclId,
        name: impl AsRef<str>,
    ) -> Result<Annotation> {
        self.add_named(unit, decl, name.as_ref())
            .map_err(in_context("add", decl))
    }

    /// Adds an annotation of type `ty` to `decl`.
    pub fn add_type(&self, unit: &mut SourceUnit, decl: DeclId, ty: &TypeRef) -> Result<Annotation> {
        self.add_named(unit, decl, ty.qualified_name())
            .map_err(in_context("add_type", decl))
    }

    /// Lists the annotations on `decl`, in source order.
    pub fn list(&self, unit: &SourceUnit, decl: DeclId) -> Result<Vec<Annotation>> {
        let capability = self
            .capability_for(unit, decl)
            .map_err(in_context("list", decl))?;
        let kind = capability.kind();
        let unit_id = unit.id();
        let views: Vec<_> = capability
            .sequence(unit, decl)
            .map_err(in_context("list", decl))?
            .iter()
            .filter_map(Modifier::node_id)
            .map(|node| Annotation::new(unit_id, decl, node, kind))
            .collect();
        trace!("listed {} annotation(s) on {decl}", views.len());
        Ok(views)
    }

    /// Finds the first annotation on `decl` whose name is equivalent to `name`.
    ///
    /// Either form of a name matches the other: `Override` finds an
    /// annotation added as `java.lang.Override` and vice versa. Absence is
    /// `Ok(None)`, not an error.
    pub fn find(
        &self,
        unit: &SourceUnit,
        decl: DeclId,
        name: impl AsRef<str>,
    ) -> Result<Option<Annotation>> {
        let wanted = name.as_ref();
        let capability = self
            .capability_for(unit, decl)
            .map_err(in_context("find", decl))?;
        let found = capability
            .sequence(unit, decl)
            .map_err(in_context("find", decl))?
            .iter()
            .filter_map(Modifier::as_annotation)
            .find(|node| name::equivalent(wanted, &node.name))
            .map(|node| Annotation::new(unit.id(), decl, node.id, capability.kind()));
        trace!("find {wanted} on {decl}: {}", if found.is_some() { "hit" } else { "miss" });
        Ok(found)
    }

    /// Returns true if `decl` has an annotation equivalent to `name`.
    pub fn has(&self, unit: &SourceUnit, decl: DeclId, name: impl AsRef<str>) -> Result<bool> {
        Ok(self.find(unit, decl, name)?.is_some())
    }

    /// Removes the annotation `annotation` from `decl`.
    ///
    /// Matches by node identity only. If no current entry matches (the view
    /// is stale, belongs to another declaration, or was taken from another
    /// unit) nothing changes and no error is raised. Returns `decl` for
    /// chaining.
    pub fn remove(
        &self,
        unit: &mut SourceUnit,
        decl: DeclId,
        annotation: &Annotation,
    ) -> Result<DeclId> {
        let capability = self
            .capability_for(unit, decl)
            .map_err(in_context("remove", decl))?;
        let target = annotation.node_id();
        let same_unit = annotation.belongs_to(unit);
        let removed = {
            let sequence = capability
                .sequence_mut(unit, decl)
                .map_err(in_context("remove", decl))?;
            match sequence
                .iter()
                .position(|modifier| modifier.node_id() == Some(target))
            {
                Some(position) if same_unit => {
                    sequence.remove(position);
                    true
                }
                _ => false,
            }
        };
        if removed {
            unit.release_node(target);
        }
        if self.config.log_mutations {
            if removed {
                debug!("removed {target:?} from {decl}");
            } else {
                debug!("remove of {target:?} on {decl} matched nothing");
            }
        }
        Ok(decl)
    }

    /// Starts a structural edit of `annotation`.
    pub fn edit<'a>(
        &'a self,
        unit: &'a mut SourceUnit,
        annotation: &'a mut Annotation,
    ) -> AnnotationEditor<'a> {
        AnnotationEditor::new(self, unit, annotation)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn capability_for(&self, unit: &SourceUnit, decl: DeclId) -> Result<&dyn ModifierListCapability> {
        let kind = unit.declaration(decl)?.kind();
        self.registry.get(kind)
    }

    fn add_named(&self, unit: &mut SourceUnit, decl: DeclId, name: &str) -> Result<Annotation> {
        // Everything that can fail happens before a node id is allocated.
        name::validate(name)?;
        let capability = self.capability_for(unit, decl)?;
        let index = insertion_index(capability.sequence(unit, decl)?);

        let simple = name::simple_form(name);
        let node = unit.new_annotation(simple, Vec::new());
        let id = node.id;
        capability
            .sequence_mut(unit, decl)?
            .insert(index, Modifier::Marker(node));

        if name::is_qualified(name) && self.config.register_imports {
            unit.register_import(name);
        }
        if self.config.log_mutations {
            debug!("added @{simple} to {decl} at index {index}");
        }
        Ok(Annotation::new(unit.id(), decl, id, capability.kind()))
    }
}

pub(crate) fn in_context(operation: &'static str, decl: DeclId) -> impl FnOnce(Error) -> Error {
    move |err| {
        err.with_context(
            ErrorContext::new()
                .with_operation(operation)
                .with_declaration(decl),
        )
    }
}

/// Like [`in_context`], for operations run inside [`AnnotationModel::edit`].
pub(crate) fn in_edit_context(
    operation: &'static str,
    decl: DeclId,
) -> impl FnOnce(Error) -> Error {
    move |err| {
        err.with_context(
            ErrorContext::new()
                .with_operation(operation)
                .with_declaration(decl)
                .with_frame("edit"),
        )
    }
}
