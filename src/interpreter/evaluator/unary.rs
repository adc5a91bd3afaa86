use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operator applied to an already-computed operand.
    ///
    /// `-` requires a numeric operand and negates it. `!` applies the
    /// truthiness coercion and inverts the result, so it accepts any value.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `operand`: The evaluated operand value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Errors
    /// Returns `RuntimeError::OperandMustBeNumber` when `-` is applied to a
    /// non-numeric value.
    ///
    /// # Example
    /// ```
    /// use gsc::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let negated = Interpreter::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1);
    /// assert_eq!(negated.unwrap(), Value::Number(-5.0));
    ///
    /// let truthy = Interpreter::eval_unary(UnaryOperator::Not, &Value::Nil, 1);
    /// assert_eq!(truthy.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, operand: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match operand {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::OperandMustBeNumber { operator: op.to_string(),
                                                            line }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!operand.is_truthy())),
        }
    }
}
