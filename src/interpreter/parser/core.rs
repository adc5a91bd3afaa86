use std::iter::Peekable;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_declaration},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program from the token sequence.
///
/// A program is an ordered sequence of declarations. Parsing is
/// deterministic: the same token sequence always yields a structurally
/// identical tree.
///
/// Errors do not stop the pass. When a declaration fails to parse, the
/// error is recorded, [`synchronize`] discards tokens up to the next
/// statement boundary, and parsing resumes there, so one syntax error does
/// not suppress detection of later ones. The returned statements must not
/// be executed when the error list is non-empty.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed statements and every parse error found.
///
/// # Example
/// ```
/// use gsc::interpreter::{lexer::scan, parser::core::parse_program};
///
/// let (tokens, _) = scan("var x = 1; print x;");
/// let (statements, errors) = parse_program(&mut tokens.iter().peekable());
///
/// assert!(errors.is_empty());
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> (Vec<Stmt>, Vec<ParseError>)
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while !at_end(tokens) {
        match parse_declaration(tokens) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                errors.push(error);
                synchronize(tokens);
            },
        }
    }

    (statements, errors)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through
/// the precedence hierarchy:
///
/// ```text
///     assignment > or > and > equality > comparison > term > factor > unary
/// ```
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_assignment(tokens)
}

/// Parses an assignment expression.
///
/// Assignment is right-associative: `a = b = 1` assigns `1` to `b` and then
/// to `a`. The left-hand side is parsed as an ordinary expression first and
/// must turn out to be a plain variable reference; anything else (such as
/// `(a) = 1` or `1 = 2`) is an invalid assignment target.
///
/// Grammar: `assignment := logic_or ("=" assignment)?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// An [`Expr::Assign`] node, or the underlying expression when no `=`
/// follows.
///
/// # Errors
/// - `InvalidAssignmentTarget` if the left-hand side is not a variable.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_logical_or(tokens)?;

    if let Some((Token::Equal, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let value = parse_assignment(tokens)?;

        return match expr {
            Expr::Variable { name, .. } => Ok(Expr::Assign { name,
                                                             value: Box::new(value),
                                                             line }),
            _ => Err(ParseError::InvalidAssignmentTarget { line }),
        };
    }

    Ok(expr)
}

/// Checks whether the token stream is exhausted.
///
/// Both the explicit [`Token::Eof`] terminator and a drained iterator count
/// as the end of input.
pub fn at_end<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.peek()
          .is_none_or(|(token, _)| matches!(token, Token::Eof))
}

/// Discards tokens until a likely statement boundary.
///
/// Called after a parse error. The offending token is skipped first so the
/// caller's loop always makes progress, then tokens are dropped until just
/// past a `;` or just before a keyword that starts a new statement. The
/// parser resumes cleanly from that point.
pub fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        None | Some((Token::Eof, _)) => return,
        _ => {
            if let Some((Token::Semicolon, _)) = tokens.next() {
                return;
            }
        },
    }

    while let Some((token, _)) = tokens.peek() {
        match token {
            Token::Eof => return,
            Token::Semicolon => {
                tokens.next();
                return;
            },
            Token::Var | Token::For | Token::If | Token::While | Token::Print => return,
            _ => {
                tokens.next();
            },
        }
    }
}
