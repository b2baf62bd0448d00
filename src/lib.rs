//! Marginalia - Uniform annotation editing over declaration modifier lists
//!
//! This crate re-exports all layers of the Marginalia system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: marginalia_annotations — Annotation model, views, editor, capabilities
//! Layer 1: marginalia_syntax      — Source units, declarations, modifiers, imports
//! Layer 0: marginalia_foundation  — Core types (NodeId, DeclId, Error, names)
//! ```

pub use marginalia_annotations as annotations;
pub use marginalia_foundation as foundation;
pub use marginalia_syntax as syntax;
