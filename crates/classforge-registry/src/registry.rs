//! ClassRegistry - the class definition lifecycle state machine.
//!
//! This module provides [`ClassRegistry`], the catalog mapping class names
//! to [`ClassDefinition`] records. It owns every lifecycle operation:
//! define, derive, mutate, freeze (materialize), and introspect.
//!
//! # Storage Model
//!
//! - Definitions are stored in a single map keyed by class name.
//! - The registry owns its collaborators: a [`FragmentCompiler`] that turns
//!   member source text into structural members, and a [`Materializer`]
//!   that turns frozen definitions into live instances.
//!
//! # Atomicity
//!
//! Multi-fragment operations (`define`, `derive`) compile every fragment
//! against a scratch definition and commit to the map only when all of
//! them succeeded — a failing fragment never leaves a partial definition
//! behind. Single-fragment mutations compile before touching the stored
//! definition, so a rejected fragment never leaves a member half-attached.
//!
//! # Thread Safety
//!
//! `ClassRegistry` is **not thread-safe** by design: every operation takes
//! `&mut self`, so Rust's ownership rules already guarantee that a draft
//! mutation and a freeze cannot interleave. A caller that needs shared
//! access wraps the registry in `Mutex`/`RwLock`, which makes the
//! Draft→Frozen transition an atomic check-and-set: of two racing
//! `materialize` calls, exactly one wins and the loser observes
//! [`RegistryError::AlreadyMaterialized`].
//!
//! # Example
//!
//! ```
//! use classforge_registry::ClassRegistry;
//! use classforge_compiler::FragmentParser;
//! use classforge_core::{TypeLoader, Value};
//!
//! let mut registry = ClassRegistry::new(FragmentParser::new(), TypeLoader::new());
//! registry.define("Point", &["int x = 1;", "int y = 2;"], &[]).unwrap();
//! registry.add_method("Point", "int getSum() { return x + y; }").unwrap();
//!
//! let mut point = registry.materialize("Point").unwrap();
//! assert_eq!(point.invoke("getSum", &[]).unwrap(), Value::Int(3));
//! ```

use rustc_hash::FxHashMap;

use classforge_core::{
    ClassDefinition, DefinitionState, FragmentCompiler, MaterializeError, Materializer,
    RegistryError,
};

/// Catalog of class definitions, generic over its compiler and
/// materializer so the state machine can be exercised with fakes.
pub struct ClassRegistry<C, M> {
    classes: FxHashMap<String, ClassDefinition>,
    compiler: C,
    materializer: M,
}

impl<C, M> ClassRegistry<C, M>
where
    C: FragmentCompiler,
    M: Materializer,
{
    /// Create an empty registry with the given collaborators.
    pub fn new(compiler: C, materializer: M) -> Self {
        Self {
            classes: FxHashMap::default(),
            compiler,
            materializer,
        }
    }

    // ==========================================================================
    // Creation
    // ==========================================================================

    /// Define a new draft class with the given member fragments.
    ///
    /// All-or-nothing: if any fragment fails to compile, nothing is
    /// registered.
    pub fn define(
        &mut self,
        name: &str,
        fields: &[&str],
        methods: &[&str],
    ) -> Result<(), RegistryError> {
        let name = checked_name(name)?;
        if self.classes.contains_key(&name) {
            return Err(RegistryError::DuplicateClass(name));
        }

        let mut def = ClassDefinition::draft(&name);
        self.compile_members(&mut def, fields, methods)?;
        self.classes.insert(name, def);
        Ok(())
    }

    /// Derive a new class from an existing one, **consuming** the base's
    /// identity: on success `base_name` no longer resolves and `new_name`
    /// holds the base's members plus the new fragments.
    ///
    /// A frozen base yields a fresh draft — materialization state is never
    /// inherited, only the member snapshot. The base's registry entry is
    /// renamed atomically from the caller's perspective: if any new
    /// fragment fails to compile, the base stays untouched under its old
    /// name.
    pub fn derive(
        &mut self,
        new_name: &str,
        base_name: &str,
        fields: &[&str],
        methods: &[&str],
    ) -> Result<(), RegistryError> {
        let new_name = self.derived_name(new_name, base_name)?;
        let base = self
            .classes
            .get(base_name)
            .ok_or_else(|| RegistryError::NoSuchClass(base_name.to_string()))?;

        let mut def = base.derive_as(&new_name);
        self.compile_members(&mut def, fields, methods)?;

        // Commit: rename the entry in one step.
        self.classes.remove(base_name);
        self.classes.insert(new_name, def);
        Ok(())
    }

    /// Like [`derive`](Self::derive), but non-consuming: the base
    /// definition stays registered under its own name.
    pub fn derive_copy(
        &mut self,
        new_name: &str,
        base_name: &str,
        fields: &[&str],
        methods: &[&str],
    ) -> Result<(), RegistryError> {
        let new_name = self.derived_name(new_name, base_name)?;
        let base = self
            .classes
            .get(base_name)
            .ok_or_else(|| RegistryError::NoSuchClass(base_name.to_string()))?;

        let mut def = base.derive_as(&new_name);
        self.compile_members(&mut def, fields, methods)?;
        self.classes.insert(new_name, def);
        Ok(())
    }

    // ==========================================================================
    // Draft Mutation
    // ==========================================================================

    /// Compile a field fragment and append it to a draft definition.
    ///
    /// Duplicate field names are allowed; the materializer lets later
    /// declarations shadow earlier ones.
    pub fn add_field(&mut self, name: &str, fragment: &str) -> Result<(), RegistryError> {
        let def = lookup_mut(&mut self.classes, name)?;
        if def.is_frozen() {
            return Err(RegistryError::FrozenClass(name.to_string()));
        }
        let field = self.compiler.compile_field(def, fragment)?;
        def.push_field(field)
    }

    /// Compile a method fragment and append it to a draft definition.
    ///
    /// Duplicate method names accumulate as overloads.
    pub fn add_method(&mut self, name: &str, fragment: &str) -> Result<(), RegistryError> {
        let def = lookup_mut(&mut self.classes, name)?;
        if def.is_frozen() {
            return Err(RegistryError::FrozenClass(name.to_string()));
        }
        let method = self.compiler.compile_method(def, fragment)?;
        def.push_method(method)
    }

    /// Remove every field with the given name from a draft definition.
    pub fn remove_field(&mut self, name: &str, field_name: &str) -> Result<(), RegistryError> {
        let def = lookup_mut(&mut self.classes, name)?;
        if def.remove_fields(field_name)? == 0 {
            return Err(RegistryError::MemberNotFound {
                class: name.to_string(),
                kind: "field",
                name: field_name.to_string(),
            });
        }
        Ok(())
    }

    /// Remove every method (all overloads) with the given name from a
    /// draft definition. Removing at least one match is success.
    pub fn remove_methods(&mut self, name: &str, method_name: &str) -> Result<(), RegistryError> {
        let def = lookup_mut(&mut self.classes, name)?;
        if def.remove_methods(method_name)? == 0 {
            return Err(RegistryError::MemberNotFound {
                class: name.to_string(),
                kind: "method",
                name: method_name.to_string(),
            });
        }
        Ok(())
    }

    // ==========================================================================
    // Materialization
    // ==========================================================================

    /// Freeze a definition into the live type space and return an
    /// instance of it.
    ///
    /// The first call performs the one-way Draft→Frozen transition.
    /// Calling again is idempotent: the definition is instantiated from
    /// the already-loaded snapshot without re-running global registration.
    /// If the facility already holds this identity through another path,
    /// the call fails with [`RegistryError::AlreadyMaterialized`].
    pub fn materialize(&mut self, name: &str) -> Result<M::Handle, RegistryError> {
        let def = lookup_mut(&mut self.classes, name)?;

        if def.is_frozen() {
            return self.materializer.instantiate(def).map_err(RegistryError::from);
        }

        if self.materializer.is_frozen_externally(def.def_hash()) {
            return Err(RegistryError::AlreadyMaterialized(name.to_string()));
        }

        let handle = match self.materializer.materialize(def) {
            Ok(handle) => handle,
            Err(MaterializeError::AlreadyLoaded(_)) => {
                return Err(RegistryError::AlreadyMaterialized(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        def.freeze();
        Ok(handle)
    }

    // ==========================================================================
    // Introspection
    // ==========================================================================

    /// Field names of a definition, in declaration order, one entry per
    /// declaration. Valid in either lifecycle state.
    pub fn field_names(&self, name: &str) -> Result<Vec<String>, RegistryError> {
        Ok(self.lookup(name)?.field_names())
    }

    /// Method names of a definition, in declaration order, one entry per
    /// overload. Valid in either lifecycle state.
    pub fn method_names(&self, name: &str) -> Result<Vec<String>, RegistryError> {
        Ok(self.lookup(name)?.method_names())
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.get(name)
    }

    /// Whether a definition with this name exists.
    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Lifecycle state of a definition.
    pub fn state(&self, name: &str) -> Result<DefinitionState, RegistryError> {
        Ok(self.lookup(name)?.state())
    }

    /// Iterate over all definitions.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes.values()
    }

    /// All registered class names (unordered).
    pub fn class_names(&self) -> Vec<&str> {
        self.classes.keys().map(String::as_str).collect()
    }

    /// Number of registered definitions.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    // ==========================================================================
    // Resolution Context
    // ==========================================================================

    /// Register an external lookup source with the fragment compiler.
    ///
    /// Process-wide; touches no single class definition.
    pub fn add_lookup_source(&mut self, token: &str) -> Result<(), RegistryError> {
        self.compiler.add_lookup_source(token).map_err(RegistryError::from)
    }

    /// Declare an imported namespace with the fragment compiler.
    ///
    /// The compiler's implicit, always-available namespace is a no-op.
    pub fn declare_import(&mut self, namespace: &str) -> Result<(), RegistryError> {
        self.compiler.declare_import(namespace).map_err(RegistryError::from)
    }

    /// Access the fragment compiler.
    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Access the materializer.
    pub fn materializer(&self) -> &M {
        &self.materializer
    }

    // ==========================================================================
    // Internal
    // ==========================================================================

    fn lookup(&self, name: &str) -> Result<&ClassDefinition, RegistryError> {
        self.classes
            .get(name)
            .ok_or_else(|| RegistryError::NoSuchClass(name.to_string()))
    }

    /// Validate the name of a derived definition.
    fn derived_name(&self, new_name: &str, base_name: &str) -> Result<String, RegistryError> {
        let new_name = checked_name(new_name)?;
        if new_name == base_name {
            return Err(RegistryError::InvalidName(new_name));
        }
        if self.classes.contains_key(&new_name) {
            return Err(RegistryError::DuplicateClass(new_name));
        }
        Ok(new_name)
    }

    /// Compile fragments onto a scratch definition. The definition is not
    /// in the map yet, so a failure here discards everything.
    fn compile_members(
        &self,
        def: &mut ClassDefinition,
        fields: &[&str],
        methods: &[&str],
    ) -> Result<(), RegistryError> {
        for fragment in fields {
            let field = self.compiler.compile_field(def, fragment)?;
            def.push_field(field)?;
        }
        for fragment in methods {
            let method = self.compiler.compile_method(def, fragment)?;
            def.push_method(method)?;
        }
        Ok(())
    }
}

fn checked_name(name: &str) -> Result<String, RegistryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RegistryError::InvalidName(name.to_string()));
    }
    Ok(trimmed.to_string())
}

fn lookup_mut<'a>(
    classes: &'a mut FxHashMap<String, ClassDefinition>,
    name: &str,
) -> Result<&'a mut ClassDefinition, RegistryError> {
    classes
        .get_mut(name)
        .ok_or_else(|| RegistryError::NoSuchClass(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use classforge_core::{
        DefHash, FieldMember, MemberFlags, MethodMember, Stmt, SyntaxError, TypeName,
    };
    use rustc_hash::FxHashSet;

    /// Fake compiler: a fragment is just a member name; the fragment
    /// `"!"` fails to compile.
    struct FakeCompiler {
        imports: FxHashSet<String>,
        lookup_sources: Vec<String>,
    }

    impl FakeCompiler {
        fn new() -> Self {
            Self {
                imports: FxHashSet::default(),
                lookup_sources: Vec::new(),
            }
        }
    }

    impl FragmentCompiler for FakeCompiler {
        fn compile_field(
            &self,
            _owner: &ClassDefinition,
            source: &str,
        ) -> Result<FieldMember, SyntaxError> {
            if source == "!" {
                return Err(SyntaxError::EmptyFragment);
            }
            Ok(FieldMember::new(
                source,
                TypeName::Int,
                None,
                MemberFlags::empty(),
                source,
            ))
        }

        fn compile_method(
            &self,
            _owner: &ClassDefinition,
            source: &str,
        ) -> Result<MethodMember, SyntaxError> {
            if source == "!" {
                return Err(SyntaxError::EmptyFragment);
            }
            Ok(MethodMember::new(
                source,
                Vec::new(),
                TypeName::Void,
                vec![Stmt::Return(None)],
                MemberFlags::empty(),
                source,
            ))
        }

        fn add_lookup_source(&mut self, token: &str) -> Result<(), SyntaxError> {
            self.lookup_sources.push(token.to_string());
            Ok(())
        }

        fn declare_import(&mut self, namespace: &str) -> Result<(), SyntaxError> {
            if !self.imports.insert(namespace.to_string()) {
                return Err(SyntaxError::DuplicateImport(namespace.to_string()));
            }
            Ok(())
        }
    }

    /// Fake materializer that records every call.
    #[derive(Default)]
    struct FakeMaterializer {
        loaded: FxHashSet<DefHash>,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl Materializer for FakeMaterializer {
        type Handle = String;

        fn materialize(&mut self, def: &ClassDefinition) -> Result<String, MaterializeError> {
            self.calls.borrow_mut().push(format!("materialize {}", def.name()));
            if !self.loaded.insert(def.def_hash()) {
                return Err(MaterializeError::AlreadyLoaded(def.name().to_string()));
            }
            Ok(def.name().to_string())
        }

        fn instantiate(&mut self, def: &ClassDefinition) -> Result<String, MaterializeError> {
            self.calls.borrow_mut().push(format!("instantiate {}", def.name()));
            if !self.loaded.contains(&def.def_hash()) {
                return Err(MaterializeError::NotLoaded(def.name().to_string()));
            }
            Ok(def.name().to_string())
        }

        fn is_frozen_externally(&self, hash: DefHash) -> bool {
            self.loaded.contains(&hash)
        }
    }

    fn registry() -> ClassRegistry<FakeCompiler, FakeMaterializer> {
        ClassRegistry::new(FakeCompiler::new(), FakeMaterializer::default())
    }

    #[test]
    fn define_then_list_members() {
        let mut reg = registry();
        reg.define("Point", &["x", "y"], &["getSum"]).unwrap();

        assert_eq!(reg.field_names("Point").unwrap(), vec!["x", "y"]);
        assert_eq!(reg.method_names("Point").unwrap(), vec!["getSum"]);
        assert_eq!(reg.state("Point").unwrap(), DefinitionState::Draft);
        assert_eq!(reg.get("Point").unwrap().parent(), None);
    }

    #[test]
    fn define_rejects_blank_names() {
        let mut reg = registry();
        for bad in ["", "   ", "\t\n"] {
            assert!(matches!(
                reg.define(bad, &[], &[]).unwrap_err(),
                RegistryError::InvalidName(_)
            ));
        }
        assert_eq!(reg.class_count(), 0);
    }

    #[test]
    fn define_trims_the_name() {
        let mut reg = registry();
        reg.define("  Point  ", &[], &[]).unwrap();
        assert!(reg.contains_class("Point"));
        assert!(!reg.contains_class("  Point  "));
    }

    #[test]
    fn define_rejects_duplicates() {
        let mut reg = registry();
        reg.define("Point", &[], &[]).unwrap();
        assert_eq!(
            reg.define("Point", &[], &[]).unwrap_err(),
            RegistryError::DuplicateClass("Point".to_string())
        );
    }

    #[test]
    fn failed_define_registers_nothing() {
        let mut reg = registry();
        let err = reg.define("Point", &["x", "!"], &[]).unwrap_err();
        assert!(matches!(err, RegistryError::Compile(_)));
        assert!(!reg.contains_class("Point"));
    }

    #[test]
    fn add_members_to_draft() {
        let mut reg = registry();
        reg.define("Point", &["x"], &[]).unwrap();
        reg.add_field("Point", "y").unwrap();
        reg.add_method("Point", "getSum").unwrap();
        assert_eq!(reg.field_names("Point").unwrap(), vec!["x", "y"]);
        assert_eq!(reg.method_names("Point").unwrap(), vec!["getSum"]);
    }

    #[test]
    fn mutation_requires_existing_class() {
        let mut reg = registry();
        assert_eq!(
            reg.add_field("Ghost", "x").unwrap_err(),
            RegistryError::NoSuchClass("Ghost".to_string())
        );
        assert_eq!(
            reg.remove_methods("Ghost", "m").unwrap_err(),
            RegistryError::NoSuchClass("Ghost".to_string())
        );
        assert!(matches!(
            reg.field_names("Ghost").unwrap_err(),
            RegistryError::NoSuchClass(_)
        ));
    }

    #[test]
    fn failed_add_leaves_member_unattached() {
        let mut reg = registry();
        reg.define("Point", &["x"], &[]).unwrap();
        assert!(reg.add_field("Point", "!").is_err());
        assert_eq!(reg.field_names("Point").unwrap(), vec!["x"]);
    }

    #[test]
    fn remove_field_and_methods() {
        let mut reg = registry();
        reg.define("C", &["x", "y"], &["get", "get", "other"]).unwrap();

        reg.remove_field("C", "x").unwrap();
        assert_eq!(reg.field_names("C").unwrap(), vec!["y"]);
        assert_eq!(
            reg.remove_field("C", "x").unwrap_err(),
            RegistryError::MemberNotFound {
                class: "C".to_string(),
                kind: "field",
                name: "x".to_string(),
            }
        );

        // All overloads go at once; at least one match is success.
        reg.remove_methods("C", "get").unwrap();
        assert_eq!(reg.method_names("C").unwrap(), vec!["other"]);
        assert_eq!(
            reg.remove_methods("C", "get").unwrap_err(),
            RegistryError::MemberNotFound {
                class: "C".to_string(),
                kind: "method",
                name: "get".to_string(),
            }
        );
    }

    #[test]
    fn materialize_freezes_and_returns_handle() {
        let mut reg = registry();
        reg.define("Point", &["x"], &[]).unwrap();

        let handle = reg.materialize("Point").unwrap();
        assert_eq!(handle, "Point");
        assert_eq!(reg.state("Point").unwrap(), DefinitionState::Frozen);
    }

    #[test]
    fn frozen_rejects_every_mutation() {
        let mut reg = registry();
        reg.define("Point", &["x"], &["get"]).unwrap();
        reg.materialize("Point").unwrap();

        let frozen = RegistryError::FrozenClass("Point".to_string());
        assert_eq!(reg.add_field("Point", "z").unwrap_err(), frozen);
        assert_eq!(reg.add_method("Point", "m").unwrap_err(), frozen);
        assert_eq!(reg.remove_field("Point", "x").unwrap_err(), frozen);
        assert_eq!(reg.remove_methods("Point", "get").unwrap_err(), frozen);
        // Nothing was partially applied.
        assert_eq!(reg.field_names("Point").unwrap(), vec!["x"]);
        assert_eq!(reg.method_names("Point").unwrap(), vec!["get"]);
    }

    #[test]
    fn rematerialize_is_idempotent_without_global_side_effects() {
        let mut reg = registry();
        reg.define("Point", &["x"], &[]).unwrap();
        reg.materialize("Point").unwrap();
        reg.materialize("Point").unwrap();

        let calls = reg.materializer().calls.borrow().clone();
        assert_eq!(calls, vec!["materialize Point", "instantiate Point"]);
    }

    #[test]
    fn externally_frozen_definition_cannot_be_materialized() {
        let mut reg = registry();
        reg.define("Point", &["x"], &[]).unwrap();
        // Another path already pushed this identity into the type space.
        reg.materializer.loaded.insert(DefHash::from_name("Point"));

        assert_eq!(
            reg.materialize("Point").unwrap_err(),
            RegistryError::AlreadyMaterialized("Point".to_string())
        );
        // The failed freeze left the definition a draft.
        assert_eq!(reg.state("Point").unwrap(), DefinitionState::Draft);
    }

    #[test]
    fn derive_consumes_the_base_identity() {
        let mut reg = registry();
        reg.define("Point", &["x", "y"], &["getSum"]).unwrap();
        reg.materialize("Point").unwrap();

        reg.derive("Point3D", "Point", &["z"], &["getFullSum"]).unwrap();

        // Base name is gone; the new name holds base ∪ new.
        assert!(!reg.contains_class("Point"));
        assert_eq!(
            reg.field_names("Point").unwrap_err(),
            RegistryError::NoSuchClass("Point".to_string())
        );
        assert_eq!(reg.field_names("Point3D").unwrap(), vec!["x", "y", "z"]);
        assert_eq!(
            reg.method_names("Point3D").unwrap(),
            vec!["getSum", "getFullSum"]
        );

        // The copy is a fresh draft with provenance recorded.
        let def = reg.get("Point3D").unwrap();
        assert_eq!(def.state(), DefinitionState::Draft);
        assert_eq!(def.parent(), Some("Point"));
    }

    #[test]
    fn derive_validates_names() {
        let mut reg = registry();
        reg.define("Point", &[], &[]).unwrap();
        reg.define("Other", &[], &[]).unwrap();

        assert!(matches!(
            reg.derive("  ", "Point", &[], &[]).unwrap_err(),
            RegistryError::InvalidName(_)
        ));
        assert!(matches!(
            reg.derive("Point", "Point", &[], &[]).unwrap_err(),
            RegistryError::InvalidName(_)
        ));
        assert_eq!(
            reg.derive("Other", "Point", &[], &[]).unwrap_err(),
            RegistryError::DuplicateClass("Other".to_string())
        );
        assert_eq!(
            reg.derive("New", "Ghost", &[], &[]).unwrap_err(),
            RegistryError::NoSuchClass("Ghost".to_string())
        );
    }

    #[test]
    fn failed_derive_leaves_base_untouched() {
        let mut reg = registry();
        reg.define("Point", &["x"], &[]).unwrap();

        let err = reg.derive("Point3D", "Point", &["z", "!"], &[]).unwrap_err();
        assert!(matches!(err, RegistryError::Compile(_)));
        assert!(reg.contains_class("Point"));
        assert!(!reg.contains_class("Point3D"));
        assert_eq!(reg.field_names("Point").unwrap(), vec!["x"]);
    }

    #[test]
    fn derive_copy_keeps_the_base() {
        let mut reg = registry();
        reg.define("Point", &["x"], &[]).unwrap();
        reg.derive_copy("Point3D", "Point", &["z"], &[]).unwrap();

        assert!(reg.contains_class("Point"));
        assert_eq!(reg.field_names("Point").unwrap(), vec!["x"]);
        assert_eq!(reg.field_names("Point3D").unwrap(), vec!["x", "z"]);
        assert_eq!(reg.get("Point3D").unwrap().parent(), Some("Point"));
    }

    #[test]
    fn derived_class_can_be_materialized_under_its_new_identity() {
        let mut reg = registry();
        reg.define("Point", &["x"], &[]).unwrap();
        reg.materialize("Point").unwrap();
        reg.derive("Point3D", "Point", &["z"], &[]).unwrap();

        // New name, new identity hash: the loaded base does not block it.
        let handle = reg.materialize("Point3D").unwrap();
        assert_eq!(handle, "Point3D");
    }

    #[test]
    fn resolution_context_forwards_to_the_compiler() {
        let mut reg = registry();
        reg.declare_import("geom").unwrap();
        reg.add_lookup_source("host-symbols").unwrap();
        assert!(reg.compiler().imports.contains("geom"));
        assert_eq!(reg.compiler().lookup_sources, vec!["host-symbols"]);

        assert!(matches!(
            reg.declare_import("geom").unwrap_err(),
            RegistryError::Compile(SyntaxError::DuplicateImport(_))
        ));
    }

    #[test]
    fn class_names_and_iteration() {
        let mut reg = registry();
        reg.define("A", &[], &[]).unwrap();
        reg.define("B", &[], &[]).unwrap();

        let mut names = reg.class_names();
        names.sort_unstable();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(reg.classes().count(), 2);
    }
}
