use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
///
/// Operator names such as `add` or `let` are lexed as ordinary identifiers.
/// Whether an identifier names an operator depends on whether it is followed
/// by `(`, which is decided by the parser.
///
/// The lexer deliberately has no rule for whitespace: any whitespace that
/// reaches it is reported as an unexpected character.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Decimal digit runs such as `42`. The digits are kept as text so that
    /// the parser can report literals that do not fit in an `i32`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Alphabetic identifiers; variable names or operator names.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(digits) => write!(f, "{digits}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
        }
    }
}

/// Converts source text into `(Token, column)` pairs.
///
/// Columns are 1-based byte offsets into `source`.
///
/// # Errors
/// Returns `ParseError::UnexpectedCharacter` for the first character that does
/// not start a token, including whitespace.
///
/// # Example
/// ```
/// use letcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("add(1,x)").unwrap();
/// assert_eq!(tokens[0], (Token::Identifier("add".to_string()), 1));
/// assert_eq!(tokens[2], (Token::Number("1".to_string()), 5));
///
/// assert!(tokenize("add(1, x)").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start + 1;
        if let Ok(tok) = token {
            tokens.push((tok, column));
        } else {
            return Err(ParseError::UnexpectedCharacter { found: lexer.slice().to_string(),
                                                         column });
        }
    }

    Ok(tokens)
}

/// Renders a token sequence back into source text, for error messages.
#[must_use]
pub fn render(tokens: &[(Token, usize)]) -> String {
    tokens.iter().map(|(tok, _)| tok.to_string()).collect()
}
