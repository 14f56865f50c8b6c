//! classforge - a runtime class definition registry.
//!
//! Class definitions are built incrementally from member source fragments,
//! derived from one another, and then irreversibly frozen into concrete,
//! instantiable types:
//!
//! ```
//! use classforge::{Value, default_registry};
//!
//! let mut registry = default_registry();
//! registry
//!     .define(
//!         "Point",
//!         &["int x = 1;", "int y = 2;"],
//!         &["int getSum() { return x + y; }"],
//!     )
//!     .unwrap();
//!
//! let mut point = registry.materialize("Point").unwrap();
//! assert_eq!(point.invoke("getSum", &[]).unwrap(), Value::Int(3));
//!
//! // Frozen now: the definition is permanently read-only...
//! assert!(registry.add_field("Point", "int z = 5;").is_err());
//!
//! // ...but it can still seed a new class, which consumes its identity.
//! registry
//!     .derive("Point3D", "Point", &["int z = 5;"], &[])
//!     .unwrap();
//! assert!(!registry.contains_class("Point"));
//! ```

pub use classforge_compiler::{FragmentParser, IMPLICIT_IMPORT, ResolutionContext};
pub use classforge_core::{
    BinaryOp, ClassDefinition, DefHash, DefinitionState, Expr, FieldMember, FragmentCompiler,
    Instance, LoadedClass, MaterializeError, Materializer, MemberFlags, MethodMember, Param,
    RegistryError, RuntimeError, Span, Stmt, SyntaxError, TypeLoader, TypeName, UnaryOp, Value,
};
pub use classforge_registry::ClassRegistry;

/// The registry wired with the shipped collaborators: the fragment
/// grammar compiler and the in-process type loader.
pub type DefaultRegistry = ClassRegistry<FragmentParser, TypeLoader>;

/// Create an empty [`DefaultRegistry`].
///
/// Each registry owns its own live type space, so tests (and embedders
/// that want isolation) can simply create a fresh one.
pub fn default_registry() -> DefaultRegistry {
    ClassRegistry::new(FragmentParser::new(), TypeLoader::new())
}
