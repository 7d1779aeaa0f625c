use tracing::{debug, trace};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, render, tokenize},
        parser::form::parse_form,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Lexes and parses a complete expression.
///
/// The whole input must form exactly one expression. Whitespace is not
/// accepted anywhere; see [`crate::util::preprocess`] for normalizing user
/// input first.
///
/// # Example
/// ```
/// use letcalc::{ast::Expr, interpreter::parser::core::parse};
///
/// let expr = parse("let(a,5,add(a,a))").unwrap();
/// assert!(matches!(expr, Expr::Let { .. }));
/// assert_eq!(expr.to_string(), "let(a,5,add(a,a))");
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let expr = parse_expression(&tokens, 1)?;
    debug!(%expr, "parsed expression");
    Ok(expr)
}

/// Parses a token sequence that must form exactly one expression.
///
/// The sequence is classified by its shape, in order:
/// ```text
///     NUMBER
///     NAME "(" ... ")"      operator or let form
///     NAME                  variable reference
/// ```
/// Anything else, including an empty sequence, is an invalid expression.
///
/// # Parameters
/// - `tokens`: The tokens of the expression.
/// - `column`: Where the expression would start, reported if `tokens` is
///   empty.
pub fn parse_expression(tokens: &[(Token, usize)], column: usize) -> ParseResult<Expr> {
    trace!(expr = %render(tokens), "parsing");

    match tokens {
        [(Token::Number(digits), column)] => parse_number(digits, *column),
        [(Token::Identifier(name), column), (Token::LParen, _), ..] => {
            parse_form(name, tokens, *column)
        },
        [(Token::Identifier(name), column)] => Ok(Expr::Variable { name:   name.clone(),
                                                                   column: *column, }),
        _ => Err(ParseError::InvalidExpression { expr:   render(tokens),
                                                 column: tokens.first()
                                                               .map_or(column, |(_, c)| *c), }),
    }
}

/// Parses a digit string into an integer literal.
fn parse_number(digits: &str, column: usize) -> ParseResult<Expr> {
    digits.parse()
          .map(|value| Expr::Literal { value, column })
          .map_err(|_| ParseError::InvalidNumber { digits: digits.to_string(),
                                                   column })
}
