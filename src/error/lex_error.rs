#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during scanning.
pub enum LexError {
    /// Encountered a character that is not part of the language.
    UnexpectedCharacter {
        /// The offending source text.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal was opened but never closed before the end of the
    /// line or file.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "[line {line}] Error: Unexpected character '{character}'.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "[line {line}] Error: Unterminated string.")
            },
        }
    }
}

impl std::error::Error for LexError {}
