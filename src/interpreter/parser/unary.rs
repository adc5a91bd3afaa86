use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed
/// as `!( -x )`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let expr = parse_unary(tokens)?;
        Ok(Expr::Unary { op: UnaryOperator::Negate,
                         expr: Box::new(expr),
                         line })
    } else if let Some((Token::Bang, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let expr = parse_unary(tokens)?;
        Ok(Expr::Unary { op: UnaryOperator::Not,
                         expr: Box::new(expr),
                         line })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - number and string literals
/// - `true`, `false`, and `nil`
/// - variable references
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | "true" | "false" | "nil"
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(n), line) => {
            let expr = Expr::Literal { value: LiteralValue::Number(*n),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::Str(s), line) => {
            let expr = Expr::Literal { value: LiteralValue::Str(s.clone()),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::True, line) => {
            let expr = Expr::Literal { value: LiteralValue::Bool(true),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::False, line) => {
            let expr = Expr::Literal { value: LiteralValue::Bool(false),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::Nil, line) => {
            let expr = Expr::Literal { value: LiteralValue::Nil,
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::Identifier(name), line) => {
            let expr = Expr::Variable { name: name.clone(),
                                        line: *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Eof, line) => Err(ParseError::UnexpectedEndOfInput { line: *line }),
        (tok, line) => Err(ParseError::ExpectedExpression { token: tok.to_string(),
                                                            line:  *line, }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// An [`Expr::Grouping`] wrapping the inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().expect("caller peeked '('");
    let expr = parse_expression(tokens)?;

    match tokens.peek() {
        Some((Token::RParen, _)) => {
            tokens.next();
            Ok(Expr::Grouping { expr: Box::new(expr),
                                line })
        },
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
