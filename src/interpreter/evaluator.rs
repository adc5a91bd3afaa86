/// Core evaluation logic for expressions and statements.
///
/// Contains the interpreter state, the two dispatch routines, and scope
/// handling for blocks.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation and logical not.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations: arithmetic, string
/// concatenation, comparisons, and equality.
pub mod binary;
