//! classforge registry crate.
//!
//! This crate contains [`ClassRegistry`], the lifecycle state machine for
//! class definitions: create, derive, mutate, freeze, materialize, and
//! introspect. The data model and the collaborator traits live in
//! `classforge-core`; the default fragment compiler lives in
//! `classforge-compiler`.

mod registry;

pub use registry::ClassRegistry;

// Re-export the core types callers need to work with the registry.
pub use classforge_core::{
    ClassDefinition, DefHash, DefinitionState, FieldMember, FragmentCompiler, MaterializeError,
    Materializer, MethodMember, RegistryError, SyntaxError,
};
