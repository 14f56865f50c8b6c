//! Field member entry.

use crate::{Expr, MemberFlags, TypeName};

/// A compiled field member of a class definition.
///
/// Produced by the fragment compiler from source like `int x = 1;`.
/// Duplicate field names are allowed within a definition; the
/// materializer resolves them by letting later declarations shadow
/// earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMember {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: TypeName,
    /// Initializer expression, if the fragment had one.
    pub init: Option<Expr>,
    /// Modifier flags parsed off the fragment.
    pub flags: MemberFlags,
    /// The original source fragment, kept for diagnostics.
    pub source: String,
}

impl FieldMember {
    /// Create a new field member.
    pub fn new(
        name: impl Into<String>,
        ty: TypeName,
        init: Option<Expr>,
        flags: MemberFlags,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty,
            init,
            flags,
            source: source.into(),
        }
    }

    /// Shorthand for an `int` field with a literal initializer, used
    /// heavily in tests.
    pub fn int(name: impl Into<String>, value: i64) -> Self {
        let name = name.into();
        let source = format!("int {name} = {value};");
        Self::new(
            name,
            TypeName::Int,
            Some(Expr::Int(value)),
            MemberFlags::empty(),
            source,
        )
    }

    /// Whether this field is static.
    pub fn is_static(&self) -> bool {
        self.flags.contains(MemberFlags::STATIC)
    }
}
