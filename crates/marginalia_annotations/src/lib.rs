//! Annotation model for Marginalia.
//!
//! Adds, lists, finds, removes, and edits annotations on declarations held
//! in a [`SourceUnit`](marginalia_syntax::SourceUnit), uniformly across
//! declaration kinds.
//!
//! This crate provides:
//! - [`AnnotationModel`] - The add/list/find/has/remove operations
//! - [`Annotation`] - A stable view of one annotation occurrence
//! - [`AnnotationEditor`] - Structural edits of one annotation
//! - [`ModifierListCapability`] - Per-kind access to modifier sequences
//! - [`CapabilityRegistry`] - Capabilities keyed by declaration kind
//! - [`ModelConfig`] - Import registration and logging switches

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod capability;
pub mod config;
pub mod editor;
pub mod model;
pub mod view;

pub use capability::{
    CapabilityRegistry, MemberModifiers, ModifierListCapability, ParameterModifiers,
};
pub use config::ModelConfig;
pub use editor::{AnnotationEditor, EnumConstant};
pub use model::{AnnotationModel, insertion_index};
pub use view::Annotation;
