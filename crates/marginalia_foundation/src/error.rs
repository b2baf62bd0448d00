//! Error types for Marginalia.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Only hard conditions are errors. Absence of an annotation and removal of a
//! view that no longer matches are ordinary return values, never an `Error`.

use std::fmt;

use thiserror::Error;

use crate::id::DeclId;
use crate::kind::DeclarationKind;

/// Result type alias using the Marginalia [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Marginalia operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unsupported declaration kind error.
    #[must_use]
    pub fn unsupported_kind(kind: DeclarationKind) -> Self {
        Self::new(ErrorKind::UnsupportedDeclarationKind(kind))
    }

    /// Creates a kind mismatch error.
    #[must_use]
    pub fn kind_mismatch(expected: DeclarationKind, actual: DeclarationKind) -> Self {
        Self::new(ErrorKind::KindMismatch { expected, actual })
    }

    /// Creates a declaration not found error.
    #[must_use]
    pub fn declaration_not_found(id: DeclId) -> Self {
        Self::new(ErrorKind::DeclarationNotFound(id))
    }

    /// Creates an invalid name error.
    #[must_use]
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidName(name.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No modifier list capability is registered for this declaration kind.
    #[error("unsupported declaration kind: {0}")]
    UnsupportedDeclarationKind(DeclarationKind),

    /// A capability was asked to operate on a declaration of another kind.
    #[error("declaration kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        /// The kind the capability serves.
        expected: DeclarationKind,
        /// The kind of the declaration it was given.
        actual: DeclarationKind,
    },

    /// Declaration was not found in its source unit.
    #[error("declaration not found: {0:?}")]
    DeclarationNotFound(DeclId),

    /// Name is empty or malformed.
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the model operation that failed.
    pub operation: Option<String>,
    /// Declaration the operation targeted.
    pub declaration: Option<DeclId>,
    /// Chain of enclosing operations.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the targeted declaration.
    #[must_use]
    pub fn with_declaration(mut self, declaration: DeclId) -> Self {
        self.declaration = Some(declaration);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
            if let Some(declaration) = self.declaration {
                write!(f, " on {declaration}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
