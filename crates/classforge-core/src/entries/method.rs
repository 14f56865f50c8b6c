//! Method member entry.

use crate::{DefHash, MemberFlags, Stmt, TypeName};

/// A formal parameter of a method.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Declared type.
    pub ty: TypeName,
    /// Parameter name.
    pub name: String,
}

impl Param {
    /// Create a new parameter.
    pub fn new(ty: TypeName, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

/// A compiled method member of a class definition.
///
/// Produced by the fragment compiler from source like
/// `int getSum() { return x + y; }`. Multiple methods may share a name;
/// they are overloads, dispatched by arity at call time.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodMember {
    /// Method name.
    pub name: String,
    /// Formal parameters.
    pub params: Vec<Param>,
    /// Declared return type.
    pub ret: TypeName,
    /// Method body.
    pub body: Vec<Stmt>,
    /// Modifier flags parsed off the fragment.
    pub flags: MemberFlags,
    /// The original source fragment, kept for diagnostics.
    pub source: String,
    /// Signature hash (name + arity).
    pub sig_hash: DefHash,
}

impl MethodMember {
    /// Create a new method member. The signature hash is derived from the
    /// name and arity.
    pub fn new(
        name: impl Into<String>,
        params: Vec<Param>,
        ret: TypeName,
        body: Vec<Stmt>,
        flags: MemberFlags,
        source: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let sig_hash = DefHash::from_method(&name, params.len());
        Self {
            name,
            params,
            ret,
            body,
            flags,
            source: source.into(),
            sig_hash,
        }
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether this method is static.
    pub fn is_static(&self) -> bool {
        self.flags.contains(MemberFlags::STATIC)
    }
}
