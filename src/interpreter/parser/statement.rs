use std::iter::Peekable;

use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single declaration.
///
/// A declaration is either a `var` declaration or any other statement.
/// This is the unit the program loop retries from after an error, which is
/// why the split exists: synchronization lands on declaration boundaries.
///
/// Grammar: `declaration := var_declaration | statement`
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Var, _)) = tokens.peek() {
        return parse_var_declaration(tokens);
    }

    parse_statement(tokens)
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `var <identifier> (= <expression>)? ;`.
/// Without an initializer the variable starts as `nil`. Declaring always
/// targets the innermost scope at execution time, so re-declaring a name in
/// the same scope is allowed.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `var` keyword.
///
/// # Returns
/// A [`Stmt::Var`] node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the variable name is missing,
/// - the initializer expression is malformed,
/// - the terminating `;` is missing.
fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::Var, line)) => *line,
        _ => unreachable!("caller peeked 'var'"),
    };

    let name = match tokens.next() {
        Some((Token::Identifier(name), _)) => name.clone(),
        Some((tok, l)) => {
            return Err(ParseError::ExpectedVariableName { token: tok.to_string(),
                                                          line:  *l, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    };

    let initializer = if let Some((Token::Equal, _)) = tokens.peek() {
        tokens.next();
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    expect_semicolon(tokens, "variable declaration", line)?;

    Ok(Stmt::Var { name,
                   initializer,
                   line })
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a print statement,
/// - a block,
/// - an `if` statement,
/// - a `while` loop,
/// - an expression used as a statement.
///
/// The leading token decides the form; anything that does not start with a
/// statement keyword is parsed as an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Print, _)) => parse_print_statement(tokens),
        Some((Token::LBrace, line)) => {
            let line = *line;
            tokens.next();
            parse_block(tokens, line)
        },
        Some((Token::If, _)) => parse_if_statement(tokens),
        Some((Token::While, _)) => parse_while_statement(tokens),
        _ => {
            let line = tokens.peek().map_or(0, |(_, l)| *l);
            let expr = parse_expression(tokens)?;
            expect_semicolon(tokens, "expression", line)?;

            Ok(Stmt::Expression { expr, line })
        },
    }
}

/// Parses a print statement: `print <expression> ;`.
fn parse_print_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::Print, line)) => *line,
        _ => unreachable!("caller peeked 'print'"),
    };

    let expr = parse_expression(tokens)?;
    expect_semicolon(tokens, "value", line)?;

    Ok(Stmt::Print { expr, line })
}

/// Parses the statements of a block.
///
/// The opening `{` has already been consumed by the caller. Declarations
/// are collected until the matching `}`; running out of input before the
/// brace is an error.
///
/// Grammar: `block := "{" declaration* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
///
/// # Returns
/// A [`Stmt::Block`] containing all parsed statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some((Token::Eof, l)) => {
                return Err(ParseError::UnexpectedEndOfInput { line: *l });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { line });
            },
            _ => statements.push(parse_declaration(tokens)?),
        }
    }

    Ok(Stmt::Block { statements, line })
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if (<condition>) <statement>
///     else <statement>
/// ```
/// The branches are full statements, so `else if` chains fall out of the
/// grammar without a dedicated rule, and a dangling `else` binds to the
/// nearest preceding `if`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
///
/// # Returns
/// A [`Stmt::If`] node.
///
/// # Errors
/// - `UnexpectedToken` if the parentheses around the condition are missing.
/// - Propagates any errors from condition or branch parsing.
fn parse_if_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::If, line)) => *line,
        _ => unreachable!("caller peeked 'if'"),
    };

    expect_open_paren(tokens, "'if'", line)?;
    let condition = parse_expression(tokens)?;
    expect_close_paren(tokens, line)?;

    let then_branch = Box::new(parse_statement(tokens)?);

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Stmt::If { condition,
                  then_branch,
                  else_branch,
                  line })
}

/// Parses a `while` loop: `while (<condition>) <statement>`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `while` keyword.
///
/// # Returns
/// A [`Stmt::While`] node.
fn parse_while_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::While, line)) => *line,
        _ => unreachable!("caller peeked 'while'"),
    };

    expect_open_paren(tokens, "'while'", line)?;
    let condition = parse_expression(tokens)?;
    expect_close_paren(tokens, line)?;

    let body = Box::new(parse_statement(tokens)?);

    Ok(Stmt::While { condition,
                     body,
                     line })
}

/// Consumes a terminating `;`, describing the construct it should follow.
fn expect_semicolon<'a, I>(tokens: &mut Peekable<I>,
                           context: &str,
                           line: usize)
                           -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Semicolon, _)) => {
            tokens.next();
            Ok(())
        },
        Some((Token::Eof, l)) => Err(ParseError::UnexpectedEndOfInput { line: *l }),
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expect ';' after {context}, found '{tok}'."),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Consumes the `(` that must follow `if` or `while`.
fn expect_open_paren<'a, I>(tokens: &mut Peekable<I>,
                            keyword: &str,
                            line: usize)
                            -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            Ok(())
        },
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expect '(' after {keyword}, found '{tok}'."),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Consumes the `)` closing a condition.
fn expect_close_paren<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::RParen, _)) => {
            tokens.next();
            Ok(())
        },
        Some((_, l)) => Err(ParseError::ExpectedClosingParen { line: *l }),
        None => Err(ParseError::ExpectedClosingParen { line }),
    }
}
