use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, render},
        parser::{
            core::{ParseResult, parse_expression},
            operand::split_operand,
        },
    },
};

/// Parses an operator form `NAME(...)`.
///
/// `tokens` holds the whole form, starting with the operator name and the
/// opening parenthesis. The form must end with `)`; everything between the
/// opening parenthesis and that final `)` is split into operands with
/// [`split_operand`].
///
/// # Errors
/// - `UnknownOperator` if `name` is not `add`, `sub`, `mult`, `div` or `let`.
/// - `MissingClosingParen` if the form does not end with `)`.
/// - Any error from operand splitting or from parsing the operands.
pub(in crate::interpreter::parser) fn parse_form(name: &str,
                                                 tokens: &[(Token, usize)],
                                                 column: usize)
                                                 -> ParseResult<Expr> {
    let op = BinaryOperator::from_name(name);
    if op.is_none() && name != "let" {
        return Err(ParseError::UnknownOperator { name: name.to_string(),
                                                 column });
    }

    if tokens.len() < 3 || !matches!(tokens.last(), Some((Token::RParen, _))) {
        return Err(ParseError::MissingClosingParen { expr: render(tokens),
                                                     column });
    }

    // Operand scanning runs up to and including the final `)`, so a form that
    // closes before its separator shows up as an unmatched bracket.
    let arguments = &tokens[2..];

    match op {
        Some(op) => parse_binary(op, arguments, column),
        None => parse_let(arguments, column),
    }
}

/// Parses `left,right)` into a binary operation.
fn parse_binary(op: BinaryOperator,
                arguments: &[(Token, usize)],
                column: usize)
                -> ParseResult<Expr> {
    let (left, consumed) = split_operand(arguments, column)?;
    let separator_column = arguments[consumed].1;
    let right = &arguments[consumed + 1..arguments.len() - 1];
    let closing_column = arguments[arguments.len() - 1].1;

    Ok(Expr::BinaryOp { op,
                        left: Box::new(parse_expression(left, separator_column)?),
                        right: Box::new(parse_expression(right, closing_column)?),
                        column })
}

/// Parses `name,value,body)` into a `let` binding.
fn parse_let(arguments: &[(Token, usize)], column: usize) -> ParseResult<Expr> {
    let (name_tokens, consumed) = split_operand(arguments, column)?;
    let name = match name_tokens {
        [(Token::Identifier(name), _)] => name.clone(),
        _ => {
            return Err(ParseError::InvalidBindingName { name:   render(name_tokens),
                                                        column: arguments[0].1, });
        },
    };

    let rest = &arguments[consumed + 1..];
    let (value, consumed) = split_operand(rest, arguments[consumed].1)?;
    let separator_column = rest[consumed].1;
    let body = &rest[consumed + 1..rest.len() - 1];
    let closing_column = rest[rest.len() - 1].1;

    Ok(Expr::Let { name,
                   value: Box::new(parse_expression(value, separator_column)?),
                   body: Box::new(parse_expression(body, closing_column)?),
                   column })
}
