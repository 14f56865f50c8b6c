//! Class definition record.
//!
//! [`ClassDefinition`] is the unit the registry stores: a named bundle of
//! compiled field and method members plus a lifecycle state. Members are
//! mutable while the definition is a draft; once frozen, every mutator
//! refuses to touch it.

use crate::{DefHash, FieldMember, MethodMember, RegistryError};

/// Lifecycle state of a class definition.
///
/// There is no third, partially-materialized state: a definition observable
/// through the registry is always one of these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionState {
    /// Members may still be added and removed.
    Draft,
    /// The definition was materialized; members are permanently read-only.
    Frozen,
}

/// A named, mutable-until-frozen bundle of compiled members.
///
/// Field order is declaration order and duplicates by name are kept as-is
/// (later duplicates shadow at materialization). Methods sharing a name
/// are overloads.
///
/// The state field is private so the freeze transition is one-way: the
/// mutators check it, and nothing outside this module can flip a frozen
/// definition back to draft.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDefinition {
    name: String,
    parent: Option<String>,
    fields: Vec<FieldMember>,
    methods: Vec<MethodMember>,
    state: DefinitionState,
}

impl ClassDefinition {
    /// Create an empty draft definition with no parent.
    pub fn draft(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            fields: Vec::new(),
            methods: Vec::new(),
            state: DefinitionState::Draft,
        }
    }

    /// Create a fresh draft seeded with this definition's full member set.
    ///
    /// This is the copy step of derivation: the snapshot carries the
    /// members but never the materialization state, and the new
    /// definition's `parent` records where the members came from.
    pub fn derive_as(&self, new_name: impl Into<String>) -> Self {
        Self {
            name: new_name.into(),
            parent: Some(self.name.clone()),
            fields: self.fields.clone(),
            methods: self.methods.clone(),
            state: DefinitionState::Draft,
        }
    }

    // === Builder Methods ===

    /// Add a field (builder form, for construction and tests).
    pub fn with_field(mut self, field: FieldMember) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a method (builder form, for construction and tests).
    pub fn with_method(mut self, method: MethodMember) -> Self {
        self.methods.push(method);
        self
    }

    // === Queries ===

    /// The definition's name (the registry key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the definition this one was derived from, if any.
    ///
    /// Provenance only — derivation copies members, it does not create a
    /// live inheritance link.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DefinitionState {
        self.state
    }

    /// Whether this definition has been frozen.
    pub fn is_frozen(&self) -> bool {
        self.state == DefinitionState::Frozen
    }

    /// Identity hash, computed from the name.
    pub fn def_hash(&self) -> DefHash {
        DefHash::from_name(&self.name)
    }

    /// Fields in declaration order (duplicates included).
    pub fn fields(&self) -> &[FieldMember] {
        &self.fields
    }

    /// Methods in declaration order (overloads included).
    pub fn methods(&self) -> &[MethodMember] {
        &self.methods
    }

    /// Find a field by name. With duplicates, the shadowing (latest)
    /// declaration wins.
    pub fn find_field(&self, name: &str) -> Option<&FieldMember> {
        self.fields.iter().rev().find(|f| f.name == name)
    }

    /// Find the first method with this name.
    pub fn find_method(&self, name: &str) -> Option<&MethodMember> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// All overloads of a method name, in declaration order.
    pub fn method_overloads<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a MethodMember> {
        self.methods.iter().filter(move |m| m.name == name)
    }

    /// Field names in declaration order, one entry per declaration.
    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    /// Method names in declaration order, one entry per overload.
    pub fn method_names(&self) -> Vec<String> {
        self.methods.iter().map(|m| m.name.clone()).collect()
    }

    // === Mutation (draft only) ===

    /// Append a field. Fails if the definition is frozen.
    pub fn push_field(&mut self, field: FieldMember) -> Result<(), RegistryError> {
        self.ensure_draft()?;
        self.fields.push(field);
        Ok(())
    }

    /// Append a method. Fails if the definition is frozen.
    pub fn push_method(&mut self, method: MethodMember) -> Result<(), RegistryError> {
        self.ensure_draft()?;
        self.methods.push(method);
        Ok(())
    }

    /// Remove every field with the given name, returning how many were
    /// removed. Fails if the definition is frozen.
    pub fn remove_fields(&mut self, name: &str) -> Result<usize, RegistryError> {
        self.ensure_draft()?;
        let before = self.fields.len();
        self.fields.retain(|f| f.name != name);
        Ok(before - self.fields.len())
    }

    /// Remove every method (all overloads) with the given name, returning
    /// how many were removed. Fails if the definition is frozen.
    pub fn remove_methods(&mut self, name: &str) -> Result<usize, RegistryError> {
        self.ensure_draft()?;
        let before = self.methods.len();
        self.methods.retain(|m| m.name != name);
        Ok(before - self.methods.len())
    }

    /// Transition to `Frozen`. One-way; freezing twice is a no-op.
    pub fn freeze(&mut self) {
        self.state = DefinitionState::Frozen;
    }

    fn ensure_draft(&self) -> Result<(), RegistryError> {
        match self.state {
            DefinitionState::Draft => Ok(()),
            DefinitionState::Frozen => Err(RegistryError::FrozenClass(self.name.clone())),
        }
    }
}
