use std::io::Write;

use crate::{
    ast::{Expr, LogicalOperator, Stmt},
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes programs against a live environment.
///
/// The interpreter walks statement sequences, dispatching on each node
/// variant, mutating the environment chain, and writing print output to its
/// sink. One interpreter can run many programs in sequence; its global
/// scope persists between runs, which is what keeps REPL sessions stateful.
///
/// ## Usage
///
/// Create one with [`Interpreter::new`] (prints to stdout) or
/// [`Interpreter::with_output`] (prints to any writer), then feed it parsed
/// statements via [`Interpreter::interpret`].
pub struct Interpreter {
    /// The live scope chain. Public so a host can pre-seed global bindings
    /// before running a program.
    pub environment: Environment,
    out:             Box<dyn Write>,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Box::new(std::io::stdout()))
    }

    /// Creates an interpreter that prints to the given sink.
    ///
    /// Used by tests and hosts that capture program output.
    #[must_use]
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Self { environment: Environment::new(),
               out }
    }

    /// Executes an ordered sequence of statements.
    ///
    /// Statements run in order until the end of the program or the first
    /// runtime error, whichever comes first. The error aborts the remaining
    /// statements and is returned as the terminal outcome of the run;
    /// output printed before the error has already been emitted and is not
    /// rolled back.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    ///
    /// # Example
    /// ```
    /// use gsc::interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse_program};
    ///
    /// let (tokens, _) = scan("var x = 2; x = x * 3;");
    /// let (statements, errors) = parse_program(&mut tokens.iter().peekable());
    /// assert!(errors.is_empty());
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.interpret(&statements).unwrap();
    ///
    /// assert_eq!(interpreter.environment.get("x", 1).unwrap(),
    ///            gsc::interpreter::value::Value::Number(6.0));
    /// ```
    pub fn interpret(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// Statements produce no value; they mutate the environment, print, or
    /// control which nested statements run.
    ///
    /// # Errors
    /// Returns a `RuntimeError` when any contained expression fails to
    /// evaluate.
    pub fn execute(&mut self, statement: &Stmt) -> EvalResult<()> {
        match statement {
            Stmt::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(())
            },
            Stmt::Print { expr, .. } => {
                let value = self.eval(expr)?;
                writeln!(self.out, "{value}").expect("write program output");
                Ok(())
            },
            Stmt::Var { name, initializer, .. } => {
                let value = match initializer {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                self.environment.declare(name, value);
                Ok(())
            },
            Stmt::Block { statements, .. } => self.execute_block(statements),
            Stmt::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            },
            Stmt::While { condition, body, .. } => {
                while self.eval(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            },
        }
    }

    /// Executes the statements of a block in a fresh child scope.
    ///
    /// The scope is popped again whether the block completes or an error
    /// propagates out of it, so the caller's environment is always restored
    /// exactly before the result is returned.
    fn execute_block(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        self.environment.push_scope();

        let result = statements.iter()
                               .try_for_each(|statement| self.execute(statement));

        self.environment.pop_scope();
        result
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches based on expression variant: literals,
    /// groupings, variables, assignments, and unary, binary, and logical
    /// operations.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for operator type mismatches and
    /// undefined-variable references.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Variable { name, line } => self.environment.get(name, *line),
            Expr::Assign { name, value, line } => {
                let value = self.eval(value)?;
                self.environment.assign(name, value.clone(), *line)?;

                // Assignment is itself an expression.
                Ok(value)
            },
            Expr::Unary { op, expr, line } => {
                let operand = self.eval(expr)?;
                Self::eval_unary(*op, &operand, *line)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let lval = self.eval(left)?;
                let rval = self.eval(right)?;
                Self::eval_binary(*op, &lval, &rval, *line)
            },
            Expr::Logical { left, op, right, .. } => self.eval_logical(*op, left, right),
        }
    }

    /// Evaluates a short-circuiting logical expression.
    ///
    /// The left operand decides whether the right operand runs at all: `or`
    /// returns the left value when it is truthy, `and` returns it when it
    /// is falsy, and only otherwise is the right operand evaluated and
    /// returned. The operands keep their original values; nothing is
    /// coerced to a boolean. Skipping the right operand is observable:
    /// `false and missing` never reads `missing`.
    fn eval_logical(&mut self,
                    op: LogicalOperator,
                    left: &Expr,
                    right: &Expr)
                    -> EvalResult<Value> {
        let left_value = self.eval(left)?;

        match op {
            LogicalOperator::Or if left_value.is_truthy() => Ok(left_value),
            LogicalOperator::And if !left_value.is_truthy() => Ok(left_value),
            _ => self.eval(right),
        }
    }
}
