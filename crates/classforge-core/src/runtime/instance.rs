//! Live instances of materialized classes.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::eval::{Scope, eval_expr, exec_body};
use super::loader::LoadedClass;
use crate::{RuntimeError, TypeName, Value};

/// A live, callable instance of a materialized class.
///
/// Field slots are per-instance; the member snapshot is shared with every
/// other instance of the same loaded class.
#[derive(Debug, Clone)]
pub struct Instance {
    class: Arc<LoadedClass>,
    fields: FxHashMap<String, Value>,
}

impl Instance {
    /// Construct an instance by evaluating the class's field initializers
    /// in declaration order. Earlier fields are in scope for later
    /// initializers; duplicate names overwrite (shadowing).
    pub(crate) fn new(class: Arc<LoadedClass>) -> Result<Self, (String, RuntimeError)> {
        let mut fields = FxHashMap::default();
        for field in class.fields() {
            let value = match &field.init {
                Some(init) => {
                    let scope = Scope::new(&mut fields);
                    eval_expr(init, &scope).map_err(|e| (field.name.clone(), e))?
                }
                None => field.ty.default_value(),
            };
            if !field.ty.admits(&value) {
                return Err((
                    field.name.clone(),
                    RuntimeError::TypeMismatch {
                        expected: field.ty.as_str(),
                        found: value.type_name(),
                    },
                ));
            }
            fields.insert(field.name.clone(), value);
        }
        Ok(Self { class, fields })
    }

    /// Name of the class this instance belongs to.
    pub fn class_name(&self) -> &str {
        self.class.name()
    }

    /// Read a field slot.
    pub fn get(&self, field: &str) -> Result<Value, RuntimeError> {
        self.fields
            .get(field)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownField {
                class: self.class.name().to_string(),
                name: field.to_string(),
            })
    }

    /// Invoke a method by name.
    ///
    /// The overload is selected by arity; argument values are then checked
    /// against the parameter types. Field writes made by the body persist
    /// on this instance.
    pub fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let class = Arc::clone(&self.class);
        let mut candidates = class.overloads(name).peekable();
        if candidates.peek().is_none() {
            return Err(RuntimeError::UnknownMethod {
                class: class.name().to_string(),
                name: name.to_string(),
            });
        }
        let Some(method) = candidates.find(|m| m.arity() == args.len()) else {
            return Err(RuntimeError::NoMatchingOverload {
                class: class.name().to_string(),
                name: name.to_string(),
                argc: args.len(),
            });
        };

        let mut scope = Scope::new(&mut self.fields);
        for (param, arg) in method.params.iter().zip(args) {
            if !param.ty.admits(arg) {
                return Err(RuntimeError::TypeMismatch {
                    expected: param.ty.as_str(),
                    found: arg.type_name(),
                });
            }
            scope.declare(&param.name, *arg);
        }

        match (exec_body(&method.body, &mut scope)?, method.ret) {
            (None, TypeName::Void) => Ok(Value::Void),
            (None, _) => Err(RuntimeError::MissingReturn {
                method: method.name.clone(),
            }),
            (Some(value), ret) => {
                if !ret.admits(&value) {
                    return Err(RuntimeError::TypeMismatch {
                        expected: ret.as_str(),
                        found: value.type_name(),
                    });
                }
                Ok(value)
            }
        }
    }
}
