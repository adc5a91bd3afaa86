/// Lexical errors.
///
/// Defines the error types that can occur while scanning source text into
/// tokens. Lexical errors are collected as a batch; scanning continues past
/// each one so that every bad character in a file is reported in one pass.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing the token sequence.
/// Parse errors include unexpected tokens, missing delimiters, and invalid
/// assignment targets. They are collected as a batch via parser
/// synchronization.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches and undefined-variable references.
/// Evaluation stops at the first one.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The terminal outcome of running a whole program.
///
/// Lexical and parse errors are batched and reported together before
/// anything executes; a runtime error is reported alone because evaluation
/// stops at the first one, after its side effects have already happened.
/// The two failure channels are never converted into each other.
#[derive(Debug)]
pub enum ProgramError {
    /// The source failed to scan or parse; nothing was executed.
    Invalid {
        /// All lexical errors found in the source.
        lex:   Vec<LexError>,
        /// All parse errors found in the token sequence.
        parse: Vec<ParseError>,
    },
    /// Execution stopped at this runtime error.
    Runtime(RuntimeError),
}

impl std::fmt::Display for ProgramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { lex, parse } => {
                let mut first = true;
                for error in lex {
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                    first = false;
                }
                for error in parse {
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                    first = false;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ProgramError {}

impl From<RuntimeError> for ProgramError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
