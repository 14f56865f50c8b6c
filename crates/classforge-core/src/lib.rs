//! Core data model, errors, and service traits for classforge.
//!
//! This crate defines everything the registry and its collaborators agree
//! on: the [`ClassDefinition`] record and its members, the fragment AST,
//! the error hierarchy, the [`FragmentCompiler`]/[`Materializer`] trait
//! seams, and the default runtime ([`TypeLoader`]/[`Instance`]).

mod ast;
mod def_hash;
mod entries;
mod error;
mod member_flags;
mod services;
mod span;
mod value;

pub mod runtime;

pub use ast::{BinaryOp, Expr, Stmt, TypeName, UnaryOp};
pub use def_hash::{DefHash, hash_constants};
pub use entries::{ClassDefinition, DefinitionState, FieldMember, MethodMember, Param};
pub use error::{MaterializeError, RegistryError, RuntimeError, SyntaxError};
pub use member_flags::MemberFlags;
pub use runtime::{Instance, LoadedClass, TypeLoader};
pub use services::{FragmentCompiler, Materializer};
pub use span::Span;
pub use value::Value;
