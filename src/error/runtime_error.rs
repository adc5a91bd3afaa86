#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can stop a program during evaluation.
pub enum RuntimeError {
    /// Read or assigned a variable that no scope in the chain declares.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator was applied to a non-numeric operand.
    OperandMustBeNumber {
        /// The operator's lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A numeric binary operator was applied to non-numeric operands.
    OperandsMustBeNumbers {
        /// The operator's lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `+` was applied to operands that are neither two numbers nor two
    /// strings.
    InvalidAdditionOperands {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Gets the source line the error occurred on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::OperandMustBeNumber { line, .. }
            | Self::OperandsMustBeNumbers { line, .. }
            | Self::InvalidAdditionOperands { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "[line {line}] Undefined variable '{name}'.")
            },
            Self::OperandMustBeNumber { operator, line } => {
                write!(f, "[line {line}] Error at '{operator}': Operand must be a number.")
            },
            Self::OperandsMustBeNumbers { operator, line } => {
                write!(f, "[line {line}] Error at '{operator}': Operands must be numbers.")
            },
            Self::InvalidAdditionOperands { line } => {
                write!(f,
                       "[line {line}] Error at '+': Operands must be two numbers or two strings.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
