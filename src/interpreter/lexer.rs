use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// String literal tokens, delimited by `"`. Escapes and embedded
    /// newlines are not supported.
    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `var`
    #[token("var")]
    Var,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for` is reserved, but the statement set has no for-loop; the parser
    /// only uses it as a synchronization boundary.
    #[token("for")]
    For,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `counter`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,

    /// A string literal that reaches the end of the line or file without a
    /// closing `"`. Surfaced by [`scan`] as a lexical error.
    #[regex(r#""[^"\n]*"#, allow_greedy = true)]
    UnterminatedString,
    /// New lines bump the line counter and are otherwise ignored.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs, spaces and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// End of input. Never produced by the lexer itself; [`scan`] appends it
    /// so the token sequence is self-terminating.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The string contents without the delimiting quotes.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Nil => write!(f, "nil"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Var => write!(f, "var"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::While => write!(f, "while"),
            Self::For => write!(f, "for"),
            Self::Print => write!(f, "print"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Semicolon => write!(f, ";"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::Equal => write!(f, "="),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Bang => write!(f, "!"),
            Self::UnterminatedString => write!(f, "\""),
            Self::Eof => write!(f, "end of file"),
        }
    }
}

/// Scans source text into a token sequence.
///
/// The scanner makes a single left-to-right pass over the input. Whitespace
/// and `//` line comments are skipped, line numbers are tracked for
/// diagnostics, and one- and two-character operators are matched with
/// maximal munch (`!=` before `!`). The returned sequence is terminated by a
/// [`Token::Eof`] entry carrying the final line number.
///
/// Scanning never aborts: an unrecognized character or an unterminated
/// string is recorded as a [`LexError`] and the pass continues, so every
/// lexical error in the source is reported together.
///
/// # Parameters
/// - `source`: The full program text.
///
/// # Returns
/// The `(token, line)` sequence and all lexical errors found. The tokens are
/// only fit to parse when the error list is empty.
///
/// # Example
/// ```
/// use gsc::interpreter::lexer::{Token, scan};
///
/// let (tokens, errors) = scan("var x = 1;");
///
/// assert!(errors.is_empty());
/// assert_eq!(tokens[0], (Token::Var, 1));
/// assert_eq!(tokens[1], (Token::Identifier("x".to_string()), 1));
/// assert_eq!(tokens.last().unwrap().0, Token::Eof);
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<(Token, usize)>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(item) = lexer.next() {
        match item {
            Ok(Token::UnterminatedString) => {
                errors.push(LexError::UnterminatedString { line: lexer.extras.line });
            },
            Ok(token) => tokens.push((token, lexer.extras.line)),
            Err(()) => {
                errors.push(LexError::UnexpectedCharacter { character: lexer.slice().to_string(),
                                                            line:      lexer.extras.line, });
            },
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    (tokens, errors)
}
