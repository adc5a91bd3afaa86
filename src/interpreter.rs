/// The environment module stores the variable scope chain.
///
/// Bindings live in a stack of scopes from global to innermost. Lookup and
/// assignment walk the chain outward; declaration always targets the
/// innermost scope.
///
/// # Responsibilities
/// - Declares, reads, and mutates variable bindings.
/// - Implements shadowing and mutation-through-ancestor lookup.
/// - Mirrors block entry and exit with scope pushes and pops.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and executes
/// statements, performs arithmetic and logical operations, manages variable
/// state, and emits print output. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, scoping, and control flow.
/// - Reports runtime errors such as type mismatches or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input without
///   aborting the pass.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, reporting errors with location info.
/// - Recovers from errors at statement boundaries so several errors can be
///   reported in one pass.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values produced during execution: nil, booleans,
/// numbers, and strings. It also provides the truthiness coercion used by
/// conditions and the display conversion used by `print`.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness and display formatting.
pub mod value;
