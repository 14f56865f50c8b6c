//! Expression and statement evaluation for instance methods.
//!
//! A method call evaluates over a [`Scope`]: its parameters and locals,
//! layered over the instance's field slots. Locals shadow fields;
//! assignment writes through to whichever layer the name resolves in.

use rustc_hash::FxHashMap;

use crate::{BinaryOp, Expr, RuntimeError, Stmt, UnaryOp, Value};

/// The variable environment of a single method call.
pub(crate) struct Scope<'a> {
    /// Parameters and locals, innermost layer.
    locals: FxHashMap<String, Value>,
    /// The instance's field slots, outer layer. Writes persist after the
    /// call returns.
    fields: &'a mut FxHashMap<String, Value>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(fields: &'a mut FxHashMap<String, Value>) -> Self {
        Self {
            locals: FxHashMap::default(),
            fields,
        }
    }

    pub(crate) fn declare(&mut self, name: &str, value: Value) {
        self.locals.insert(name.to_string(), value);
    }

    fn get(&self, name: &str) -> Result<Value, RuntimeError> {
        if let Some(v) = self.locals.get(name) {
            return Ok(*v);
        }
        if let Some(v) = self.fields.get(name) {
            return Ok(*v);
        }
        Err(RuntimeError::UnknownVariable(name.to_string()))
    }

    fn set(&mut self, name: &str, value: Value) -> Result<(), RuntimeError> {
        if let Some(slot) = self.locals.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        if let Some(slot) = self.fields.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        Err(RuntimeError::UnknownVariable(name.to_string()))
    }
}

/// Evaluate an expression in a scope.
pub(crate) fn eval_expr(expr: &Expr, scope: &Scope<'_>) -> Result<Value, RuntimeError> {
    match expr {
        Expr::Int(v) => Ok(Value::Int(*v)),
        Expr::Bool(v) => Ok(Value::Bool(*v)),
        Expr::Var(name) => scope.get(name),
        Expr::Unary { op, operand } => {
            let value = eval_expr(operand, scope)?;
            eval_unary(*op, value)
        }
        Expr::Binary { op, lhs, rhs } => eval_binary(*op, lhs, rhs, scope),
    }
}

fn eval_unary(op: UnaryOp, value: Value) -> Result<Value, RuntimeError> {
    match op {
        UnaryOp::Neg => Ok(Value::Int(expect_int(value)?.wrapping_neg())),
        UnaryOp::Not => Ok(Value::Bool(!expect_bool(value)?)),
    }
}

fn eval_binary(
    op: BinaryOp,
    lhs: &Expr,
    rhs: &Expr,
    scope: &Scope<'_>,
) -> Result<Value, RuntimeError> {
    // Short-circuit operators evaluate the right side lazily.
    if matches!(op, BinaryOp::And | BinaryOp::Or) {
        let left = expect_bool(eval_expr(lhs, scope)?)?;
        return match (op, left) {
            (BinaryOp::And, false) => Ok(Value::Bool(false)),
            (BinaryOp::Or, true) => Ok(Value::Bool(true)),
            _ => Ok(Value::Bool(expect_bool(eval_expr(rhs, scope)?)?)),
        };
    }

    let left = eval_expr(lhs, scope)?;
    let right = eval_expr(rhs, scope)?;

    match op {
        BinaryOp::Add => int_op(left, right, i64::wrapping_add),
        BinaryOp::Sub => int_op(left, right, i64::wrapping_sub),
        BinaryOp::Mul => int_op(left, right, i64::wrapping_mul),
        BinaryOp::Div => int_div(left, right, i64::wrapping_div),
        BinaryOp::Rem => int_div(left, right, i64::wrapping_rem),
        BinaryOp::Eq => Ok(Value::Bool(values_equal(left, right)?)),
        BinaryOp::Ne => Ok(Value::Bool(!values_equal(left, right)?)),
        BinaryOp::Lt => int_cmp(left, right, |a, b| a < b),
        BinaryOp::Le => int_cmp(left, right, |a, b| a <= b),
        BinaryOp::Gt => int_cmp(left, right, |a, b| a > b),
        BinaryOp::Ge => int_cmp(left, right, |a, b| a >= b),
        BinaryOp::And | BinaryOp::Or => unreachable!("handled above"),
    }
}

fn int_op(left: Value, right: Value, f: fn(i64, i64) -> i64) -> Result<Value, RuntimeError> {
    Ok(Value::Int(f(expect_int(left)?, expect_int(right)?)))
}

fn int_div(left: Value, right: Value, f: fn(i64, i64) -> i64) -> Result<Value, RuntimeError> {
    let divisor = expect_int(right)?;
    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    Ok(Value::Int(f(expect_int(left)?, divisor)))
}

fn int_cmp(left: Value, right: Value, f: fn(i64, i64) -> bool) -> Result<Value, RuntimeError> {
    Ok(Value::Bool(f(expect_int(left)?, expect_int(right)?)))
}

fn values_equal(left: Value, right: Value) -> Result<bool, RuntimeError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (a, b) => Err(RuntimeError::TypeMismatch {
            expected: a.type_name(),
            found: b.type_name(),
        }),
    }
}

fn expect_int(value: Value) -> Result<i64, RuntimeError> {
    value.as_int().ok_or(RuntimeError::TypeMismatch {
        expected: "int",
        found: value.type_name(),
    })
}

fn expect_bool(value: Value) -> Result<bool, RuntimeError> {
    value.as_bool().ok_or(RuntimeError::TypeMismatch {
        expected: "bool",
        found: value.type_name(),
    })
}

/// Execute a method body. `Some(value)` means a `return` was hit.
pub(crate) fn exec_body(
    body: &[Stmt],
    scope: &mut Scope<'_>,
) -> Result<Option<Value>, RuntimeError> {
    for stmt in body {
        match stmt {
            Stmt::Local { ty, name, init } => {
                let value = eval_expr(init, scope)?;
                if !ty.admits(&value) {
                    return Err(RuntimeError::TypeMismatch {
                        expected: ty.as_str(),
                        found: value.type_name(),
                    });
                }
                scope.declare(name, value);
            }
            Stmt::Assign { name, value } => {
                let value = eval_expr(value, scope)?;
                scope.set(name, value)?;
            }
            Stmt::Return(expr) => {
                return match expr {
                    Some(expr) => Ok(Some(eval_expr(expr, scope)?)),
                    None => Ok(Some(Value::Void)),
                };
            }
        }
    }
    Ok(None)
}
