//! # gsc
//!
//! gsc is a tree-walking interpreter for a small dynamically-typed scripting
//! language with C-like expression syntax, variable declarations, block
//! scoping, conditionals, and while loops. Source text is scanned into
//! tokens, parsed into an abstract syntax tree by recursive descent, and
//! executed directly against a chain of lexical scopes.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ProgramError,
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders nodes as parenthesized prefix text for debugging.
pub mod ast;
/// Provides unified error types for scanning, parsing, and evaluation.
///
/// This module defines the three disjoint error taxonomies the pipeline can
/// produce, plus the aggregate outcome type for whole-program runs. Each
/// error carries the source line and enough context to point at the
/// offending construct.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and
///   reporting utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the environment chain to provide a complete runtime
/// for source code execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for scanning, parsing, and executing user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Scans, parses, and executes a whole program against `interpreter`.
///
/// Lexical and parse errors are collected across the whole source and
/// returned together in one [`ProgramError::Invalid`]; nothing executes
/// when any were found. A runtime error stops execution at the point it is
/// raised and is returned as the run's terminal outcome; output printed
/// before it has already been emitted.
///
/// # Errors
/// Returns an error if scanning, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use gsc::{interpreter::evaluator::core::Interpreter, run};
///
/// let mut interpreter = Interpreter::new();
///
/// // A well-formed program runs to completion.
/// assert!(run("var x = 1 + 2; x = x * 2;", &mut interpreter).is_ok());
///
/// // 'y' was never declared, so this is a runtime error.
/// assert!(run("y = 3;", &mut interpreter).is_err());
/// ```
pub fn run(source: &str, interpreter: &mut Interpreter) -> Result<(), ProgramError> {
    let (tokens, lex_errors) = scan(source);
    let (statements, parse_errors) = parse_program(&mut tokens.iter().peekable());

    if !lex_errors.is_empty() || !parse_errors.is_empty() {
        return Err(ProgramError::Invalid { lex:   lex_errors,
                                           parse: parse_errors, });
    }

    interpreter.interpret(&statements)?;
    Ok(())
}
