//! Structural form of compiled member fragments.
//!
//! The fragment compiler turns member source text into these types; the
//! runtime evaluates them. The registry treats them as opaque payload.

use std::fmt;

use crate::Value;

/// The types a fragment can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// `int` — 64-bit signed integer.
    Int,
    /// `bool`
    Bool,
    /// `void` — method return type only.
    Void,
}

impl TypeName {
    /// Map a type keyword to its type, if it is one.
    pub fn from_keyword(word: &str) -> Option<TypeName> {
        match word {
            "int" => Some(TypeName::Int),
            "bool" => Some(TypeName::Bool),
            "void" => Some(TypeName::Void),
            _ => None,
        }
    }

    /// The default value a field of this type holds when it has no
    /// initializer.
    pub fn default_value(&self) -> Value {
        match self {
            TypeName::Int => Value::Int(0),
            TypeName::Bool => Value::Bool(false),
            TypeName::Void => Value::Void,
        }
    }

    /// Keyword spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::Int => "int",
            TypeName::Bool => "bool",
            TypeName::Void => "void",
        }
    }

    /// Whether a value inhabits this type.
    pub fn admits(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (TypeName::Int, Value::Int(_))
                | (TypeName::Bool, Value::Bool(_))
                | (TypeName::Void, Value::Void)
        )
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-` (integer negation)
    Neg,
    /// `!` (boolean not)
    Not,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

/// An expression inside a field initializer or method body.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal.
    Int(i64),
    /// Boolean literal.
    Bool(bool),
    /// Variable reference: a parameter, local, or instance field.
    Var(String),
    /// Unary operation.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Binary operation.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

/// A statement inside a method body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Local declaration: `int t = x + y;`
    Local {
        ty: TypeName,
        name: String,
        init: Expr,
    },
    /// Assignment to a local or an instance field: `t = t + 1;`
    Assign { name: String, value: Expr },
    /// `return;` or `return expr;`
    Return(Option<Expr>),
}
