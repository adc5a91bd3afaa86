/// Program-level parsing and expression entry points.
///
/// Contains the program loop with error synchronization, the expression and
/// assignment rules, and the shared `ParseResult` alias.
pub mod core;

/// Statement parsing.
///
/// Implements the declaration and statement grammar: variable declarations,
/// print statements, blocks, conditionals, loops, and expression statements.
pub mod statement;

/// Binary operator precedence levels.
///
/// Implements the left-associative precedence ladder from logical `or` down
/// to multiplication and division.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators and the atomic expression forms: literals,
/// variables, and parenthesized groupings.
pub mod unary;
