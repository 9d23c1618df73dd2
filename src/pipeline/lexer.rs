use logos::Logos;

use crate::{error::ParseError, tree::BinaryOperator};

/// Represents a lexical token of an infix expression or a postfix stream.
///
/// Runs of digits and runs of letters are each consumed whole, so `12ab`
/// lexes as `Number("12")` followed by `Identifier("ab")`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'s> {
    /// Non-negative integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice())]
    Number(&'s str),
    /// Letter runs; only function names are valid identifiers.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice())]
    Identifier(&'s str),
    /// `+`, `-`, `*` or `/`.
    #[token("+", parse_operator)]
    #[token("-", parse_operator)]
    #[token("*", parse_operator)]
    #[token("/", parse_operator)]
    Operator(BinaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, newlines and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) => write!(f, "{text}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses an operator from the current token slice.
///
/// # Returns
/// - `Some(BinaryOperator)` for `+`, `-`, `*` and `/`.
/// - `None` otherwise.
fn parse_operator<'s>(lex: &mut logos::Lexer<'s, Token<'s>>) -> Option<BinaryOperator> {
    lex.slice().chars().next().and_then(BinaryOperator::from_symbol)
}

/// Splits `source` into tokens paired with their byte offsets.
///
/// # Errors
/// Returns `ParseError::InvalidCharacter` for the first character that does not
/// start any token.
///
/// # Example
/// ```
/// use infixtree::{
///     error::ParseError,
///     pipeline::lexer::{Token, tokenize},
///     tree::BinaryOperator,
/// };
///
/// let tokens = tokenize("12 *(x").unwrap();
/// assert_eq!(tokens,
///            [(Token::Number("12"), 0),
///             (Token::Operator(BinaryOperator::Mul), 3),
///             (Token::LParen, 4),
///             (Token::Identifier("x"), 5)]);
///
/// let err = tokenize("1 # 2").unwrap_err();
/// assert_eq!(err, ParseError::InvalidCharacter { character: '#', position: 2 });
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token<'_>, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;

        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(ParseError::InvalidCharacter { character, position });
        }
    }

    Ok(tokens)
}
