use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::value::Value};

/// Stores the variable bindings visible during evaluation.
///
/// Scopes form a chain from the innermost block out to the global scope,
/// kept here as a stack of maps: the first entry is the global scope and the
/// last entry is the innermost one. Blocks push a scope on entry and pop it
/// on exit, so the chain always mirrors the call structure of the evaluator.
pub struct Environment {
    scopes: Vec<HashMap<String, Value>>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates an environment containing only an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()], }
    }

    /// Declares a binding in the innermost scope.
    ///
    /// Re-declaring a name that already exists in the same scope simply
    /// overwrites it; a name declared in an outer scope is shadowed, not
    /// touched.
    ///
    /// # Panics
    /// Panics if no scope exists, which indicates an internal error: the
    /// global scope is created on construction and only block exits pop.
    ///
    /// # Example
    /// ```
    /// use gsc::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut environment = Environment::new();
    /// environment.declare("x", Value::Number(1.0));
    ///
    /// assert_eq!(environment.get("x", 1).unwrap(), Value::Number(1.0));
    /// ```
    pub fn declare(&mut self, name: &str, value: Value) {
        self.scopes
            .last_mut()
            .expect("at least the global scope")
            .insert(name.to_string(), value);
    }

    /// Declares a binding in the global (outermost) scope.
    ///
    /// This is how a host can pre-seed bindings before running a program,
    /// regardless of how many scopes are currently live.
    pub fn declare_global(&mut self, name: &str, value: Value) {
        self.scopes[0].insert(name.to_string(), value);
    }

    /// Looks up a variable, searching from the innermost scope outward.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if no scope in the chain
    /// declares the name. This is a runtime error, not a parse-time one:
    /// the language has no static binding resolution pass.
    ///
    /// # Example
    /// ```
    /// use gsc::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut environment = Environment::new();
    /// environment.declare("x", Value::Bool(true));
    /// environment.push_scope();
    ///
    /// assert_eq!(environment.get("x", 3).unwrap(), Value::Bool(true));
    /// assert!(environment.get("y", 3).is_err());
    /// ```
    pub fn get(&self, name: &str, line: usize) -> Result<Value, RuntimeError> {
        for scope in self.scopes.iter().rev() {
            if let Some(value) = scope.get(name) {
                return Ok(value.clone());
            }
        }
        Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                              line })
    }

    /// Assigns to the nearest scope that already declares the variable.
    ///
    /// The search runs from the innermost scope outward and overwrites the
    /// first match, so an assignment inside a block mutates the enclosing
    /// binding rather than creating a new one.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if no scope declares the
    /// name; assignment never declares implicitly.
    ///
    /// # Example
    /// ```
    /// use gsc::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut environment = Environment::new();
    /// environment.declare("x", Value::Number(1.0));
    ///
    /// environment.push_scope();
    /// environment.assign("x", Value::Number(2.0), 2).unwrap();
    /// environment.pop_scope();
    ///
    /// assert_eq!(environment.get("x", 3).unwrap(), Value::Number(2.0));
    /// ```
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> Result<(), RuntimeError> {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.get_mut(name) {
                *slot = value;
                return Ok(());
            }
        }
        Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                              line })
    }

    /// Pushes a new innermost scope.
    ///
    /// Called on block entry. The new scope starts empty and shadows outer
    /// bindings only once names are declared in it.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Removes the innermost scope, restoring the enclosing one.
    ///
    /// Called on block exit. The global scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// The number of live scopes, the global scope included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
