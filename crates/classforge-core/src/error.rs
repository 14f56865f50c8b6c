//! Unified error types for classforge.
//!
//! This module provides a consistent error hierarchy for all phases of
//! working with class definitions: fragment compilation, registry
//! lifecycle operations, materialization, and instance method execution.
//!
//! ## Error Hierarchy
//!
//! ```text
//! RegistryError (caller-facing, wraps the phase errors below)
//! ├── SyntaxError      - Fragment compiler rejections
//! ├── MaterializeError - Freeze/instantiation failures
//! └── (its own variants) - Lifecycle violations (no such class, frozen, ...)
//!
//! RuntimeError - Failures while evaluating a live instance's methods
//! ```
//!
//! ## Usage
//!
//! Registry operations return `Result<_, RegistryError>`; compiler and
//! materializer failures convert in via `#[from]`, so every collaborator
//! error surfaces to the caller verbatim — nothing is swallowed or retried.

use thiserror::Error;

use crate::Span;

// ============================================================================
// Fragment Compilation Errors
// ============================================================================

/// Errors raised by the fragment compiler when member source text is
/// rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    /// An unexpected character was encountered while lexing.
    #[error("unexpected character '{ch}' at {span}")]
    UnexpectedChar { ch: char, span: Span },

    /// A token appeared where something else was required.
    #[error("at {span}: expected {expected}, found '{found}'")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        span: Span,
    },

    /// The fragment ended before the construct was complete.
    #[error("unexpected end of fragment: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A numeric literal could not be parsed.
    #[error("invalid number at {span}: {detail}")]
    InvalidNumber { span: Span, detail: String },

    /// The declared type is not usable in this position
    /// (e.g. a `void` field).
    #[error("at {span}: type '{name}' is not allowed here")]
    InvalidType { name: String, span: Span },

    /// Source text remained after a complete member was parsed.
    #[error("trailing input after member at {span}")]
    TrailingInput { span: Span },

    /// The fragment was empty or whitespace-only.
    #[error("empty member fragment")]
    EmptyFragment,

    /// A namespace was imported twice.
    #[error("namespace '{0}' is already imported")]
    DuplicateImport(String),

    /// A lookup source token was registered twice.
    #[error("lookup source '{0}' is already registered")]
    DuplicateLookupSource(String),
}

// ============================================================================
// Materialization Errors
// ============================================================================

/// Errors raised by the materializer when freezing a definition into a
/// live type or constructing an instance of one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterializeError {
    /// A definition with the same identity hash is already loaded.
    ///
    /// The live type space forbids loading the same class twice; the
    /// registry surfaces this as
    /// [`RegistryError::AlreadyMaterialized`].
    #[error("class '{0}' is already loaded into the live type space")]
    AlreadyLoaded(String),

    /// Instantiation was requested for a class that was never loaded.
    #[error("class '{0}' has not been loaded into the live type space")]
    NotLoaded(String),

    /// A field initializer failed to evaluate.
    #[error("initializing field '{field}' of '{class}': {source}")]
    Init {
        class: String,
        field: String,
        source: RuntimeError,
    },
}

// ============================================================================
// Registry Errors
// ============================================================================

/// Errors raised by registry lifecycle operations.
///
/// This is the caller-facing error type: collaborator failures
/// ([`SyntaxError`], [`MaterializeError`]) convert in via `#[from]`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// The class name was empty or whitespace-only, or a derivation
    /// reused the base name.
    #[error("invalid class name: {0:?}")]
    InvalidName(String),

    /// A definition with this name already exists.
    #[error("a class named '{0}' is already defined")]
    DuplicateClass(String),

    /// No definition with this name exists.
    #[error("there is no class named '{0}'")]
    NoSuchClass(String),

    /// The definition is frozen; members can no longer change. A new
    /// class can still be derived from it.
    #[error("class '{0}' is frozen; derive a new class from it instead of modifying it")]
    FrozenClass(String),

    /// The member targeted for removal does not exist.
    #[error("class '{class}' has no {kind} named '{name}'")]
    MemberNotFound {
        class: String,
        kind: &'static str,
        name: String,
    },

    /// The definition was already pushed into the live type space and the
    /// facility rejects duplicate registration.
    #[error("class '{0}' is already materialized")]
    AlreadyMaterialized(String),

    /// A member fragment was rejected by the fragment compiler.
    #[error("member fragment rejected: {0}")]
    Compile(#[from] SyntaxError),

    /// The materializer failed.
    #[error(transparent)]
    Materialize(#[from] MaterializeError),
}

// ============================================================================
// Runtime Errors
// ============================================================================

/// Errors raised while executing a method on a live instance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// No method with this name exists on the class.
    #[error("class '{class}' has no method named '{name}'")]
    UnknownMethod { class: String, name: String },

    /// Methods with this name exist, but none takes this many arguments.
    #[error("no overload of '{class}.{name}' takes {argc} argument(s)")]
    NoMatchingOverload {
        class: String,
        name: String,
        argc: usize,
    },

    /// An identifier resolved to neither a parameter, a local, nor a field.
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    /// No field with this name exists on the instance.
    #[error("class '{class}' has no field named '{name}'")]
    UnknownField { class: String, name: String },

    /// A value of the wrong type was used.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Integer division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A non-void method finished without returning a value.
    #[error("method '{method}' finished without returning a value")]
    MissingReturn { method: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_display() {
        let err = SyntaxError::UnexpectedToken {
            found: "}".to_string(),
            expected: "expression",
            span: Span::new(1, 9, 1),
        };
        assert_eq!(err.to_string(), "at 1:9: expected expression, found '}'");
    }

    #[test]
    fn registry_error_display() {
        let err = RegistryError::MemberNotFound {
            class: "Point".to_string(),
            kind: "field",
            name: "q".to_string(),
        };
        assert_eq!(err.to_string(), "class 'Point' has no field named 'q'");
    }

    #[test]
    fn syntax_error_converts_to_registry_error() {
        let syntax = SyntaxError::EmptyFragment;
        let err: RegistryError = syntax.clone().into();
        assert_eq!(err, RegistryError::Compile(syntax));
    }

    #[test]
    fn materialize_error_converts_to_registry_error() {
        let mat = MaterializeError::NotLoaded("Point".to_string());
        let err: RegistryError = mat.clone().into();
        assert_eq!(err, RegistryError::Materialize(mat));
    }

    #[test]
    fn init_error_carries_cause() {
        let err = MaterializeError::Init {
            class: "Point".to_string(),
            field: "x".to_string(),
            source: RuntimeError::DivisionByZero,
        };
        assert_eq!(
            err.to_string(),
            "initializing field 'x' of 'Point': division by zero"
        );
    }
}
