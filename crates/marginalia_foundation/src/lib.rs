//! Core identifiers, name resolution, and errors for Marginalia.
//!
//! This crate provides:
//! - [`NodeId`] - Generational identity of one annotation node occurrence
//! - [`DeclId`] - Index of a declaration within its source unit
//! - [`UnitId`] - Process-unique identity of a source unit
//! - [`DeclarationKind`] - The structural kinds of declaration that carry modifiers
//! - [`name`] - Pure qualified/simple name functions
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;
pub mod kind;
pub mod name;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use id::{DeclId, NodeId, UnitId};
pub use kind::DeclarationKind;
