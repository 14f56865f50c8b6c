//! Capability traits the registry depends on.
//!
//! The registry's state machine is written against these two seams so it
//! can be tested with fakes that just record calls:
//!
//! - [`FragmentCompiler`] turns member source text into structural members.
//! - [`Materializer`] turns a frozen definition snapshot into live
//!   instances, and owns the process-wide "already loaded" bookkeeping.

use crate::{
    ClassDefinition, DefHash, FieldMember, MaterializeError, MethodMember, SyntaxError,
};

/// Compiles member source fragments into structural members.
///
/// The owner definition is passed so an implementation can resolve
/// member references against the class being edited; the shipped
/// implementation does not need it, but the contract keeps the option
/// open. Compilation must be side-effect-free: a rejected fragment leaves
/// the compiler in the same state as before the call.
pub trait FragmentCompiler {
    /// Compile a field fragment such as `int x = 1;`.
    fn compile_field(
        &self,
        owner: &ClassDefinition,
        source: &str,
    ) -> Result<FieldMember, SyntaxError>;

    /// Compile a method fragment such as `int getSum() { return x + y; }`.
    fn compile_method(
        &self,
        owner: &ClassDefinition,
        source: &str,
    ) -> Result<MethodMember, SyntaxError>;

    /// Register an external lookup source for symbol resolution.
    fn add_lookup_source(&mut self, token: &str) -> Result<(), SyntaxError>;

    /// Declare an imported namespace.
    ///
    /// Implementations must treat their implicit, always-available
    /// namespace as a no-op rather than a duplicate registration.
    fn declare_import(&mut self, namespace: &str) -> Result<(), SyntaxError>;
}

/// Turns definitions into live instances.
///
/// Materialization is a one-way, process-global act: loading the same
/// definition identity twice is an error, which is why the registry asks
/// [`is_frozen_externally`](Materializer::is_frozen_externally) before
/// attempting it and routes repeat requests through
/// [`instantiate`](Materializer::instantiate) instead.
pub trait Materializer {
    /// The opaque instance handle handed back to callers.
    type Handle;

    /// Push a definition snapshot into the live type space and construct
    /// the first instance. Must fail (not overwrite) if the definition's
    /// identity hash is already loaded.
    fn materialize(&mut self, def: &ClassDefinition) -> Result<Self::Handle, MaterializeError>;

    /// Construct a further instance of an already-loaded definition
    /// without re-running the global registration.
    fn instantiate(&mut self, def: &ClassDefinition) -> Result<Self::Handle, MaterializeError>;

    /// Whether a definition with this identity hash was already pushed
    /// into the live type space — possibly by another path than this
    /// registry.
    fn is_frozen_externally(&self, hash: DefHash) -> bool;
}
