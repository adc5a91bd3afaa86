use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation over two already-computed operands.
    ///
    /// Dispatches on the operator:
    /// - `+` adds two numbers or concatenates two strings; any other
    ///   combination is a type error.
    /// - `-`, `*`, `/` require numeric operands. Division follows IEEE 754
    ///   floating-point semantics, so dividing by zero yields infinity or
    ///   NaN rather than a runtime error.
    /// - `<`, `<=`, `>`, `>=` require numeric operands.
    /// - `==`, `!=` compare any two values structurally with strict type
    ///   matching; a number never equals a string and nil equals only nil.
    ///
    /// # Parameters
    /// - `op`: The binary operator.
    /// - `left`: The evaluated left operand.
    /// - `right`: The evaluated right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Errors
    /// Returns a `RuntimeError` describing the operand type mismatch.
    ///
    /// # Example
    /// ```
    /// use gsc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                    &Value::Number(1.0),
    ///                                    &Value::Number(2.0),
    ///                                    1);
    /// assert_eq!(sum.unwrap(), Value::Number(3.0));
    ///
    /// let greeting = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                         &Value::Str("ab".to_string()),
    ///                                         &Value::Str("cd".to_string()),
    ///                                         1);
    /// assert_eq!(greeting.unwrap(), Value::Str("abcd".to_string()));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };

        match op {
            Add => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
                _ => Err(RuntimeError::InvalidAdditionOperands { line }),
            },

            Sub | Mul | Div => {
                let (a, b) = number_operands(op, left, right, line)?;

                Ok(Value::Number(match op {
                                     Sub => a - b,
                                     Mul => a * b,
                                     // IEEE semantics: x / 0 is inf or NaN.
                                     Div => a / b,
                                     _ => unreachable!(),
                                 }))
            },

            Less | Greater | LessEqual | GreaterEqual => {
                let (a, b) = number_operands(op, left, right, line)?;

                Ok(Value::Bool(match op {
                                   Less => a < b,
                                   Greater => a > b,
                                   LessEqual => a <= b,
                                   GreaterEqual => a >= b,
                                   _ => unreachable!(),
                               }))
            },

            Equal => Ok(Value::Bool(left == right)),
            NotEqual => Ok(Value::Bool(left != right)),
        }
    }
}

/// Extracts two numeric operands, or reports which operator needed them.
fn number_operands(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { operator: op.to_string(),
                                                       line }),
    }
}
