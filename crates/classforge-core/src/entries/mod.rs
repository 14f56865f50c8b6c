//! Registry entry types.
//!
//! This module provides the record types the registry stores:
//!
//! - [`ClassDefinition`] - A named, mutable-until-frozen class definition
//! - [`FieldMember`] - A compiled field member
//! - [`MethodMember`] / [`Param`] - A compiled method member
//! - [`DefinitionState`] - The draft/frozen lifecycle state

mod definition;
mod field;
mod method;

pub use definition::{ClassDefinition, DefinitionState};
pub use field::FieldMember;
pub use method::{MethodMember, Param};
