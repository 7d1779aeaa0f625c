use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, render},
        parser::core::ParseResult,
    },
};

/// The role a character or token plays while looking for an operand
/// separator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Delimiter {
    Open,
    Close,
    Separator,
}

/// Why a separator scan stopped without finding a separator.
enum ScanError {
    /// A closing bracket at depth zero, at the given index.
    UnmatchedClose(usize),
    /// The input ran out first.
    NoSeparator,
}

const fn char_delimiter(c: char) -> Option<Delimiter> {
    match c {
        '(' => Some(Delimiter::Open),
        ')' => Some(Delimiter::Close),
        ',' => Some(Delimiter::Separator),
        _ => None,
    }
}

const fn token_delimiter(token: &Token) -> Option<Delimiter> {
    match token {
        Token::LParen => Some(Delimiter::Open),
        Token::RParen => Some(Delimiter::Close),
        Token::Comma => Some(Delimiter::Separator),
        Token::Number(_) | Token::Identifier(_) => None,
    }
}

/// Finds the index of the first separator at bracket depth zero.
///
/// Separators nested inside brackets belong to inner operator forms and are
/// skipped.
fn scan_separator<I>(items: I) -> Result<usize, ScanError>
    where I: IntoIterator<Item = (usize, Option<Delimiter>)>
{
    let mut depth = 0usize;

    for (index, delimiter) in items {
        match delimiter {
            Some(Delimiter::Open) => depth += 1,
            Some(Delimiter::Close) => {
                if depth == 0 {
                    return Err(ScanError::UnmatchedClose(index));
                }
                depth -= 1;
            },
            Some(Delimiter::Separator) if depth == 0 => return Ok(index),
            _ => {},
        }
    }

    Err(ScanError::NoSeparator)
}

/// Extracts the first operand from the text that follows an operator's
/// opening parenthesis.
///
/// The operand ends at the first comma that is not nested inside brackets.
/// The returned length is the byte length of the operand, so the next operand
/// starts at `length + 1`.
///
/// # Errors
/// - `ParseError::UnmatchedClosingParen` if a `)` closes more brackets than
///   were opened before the separator.
/// - `ParseError::MissingSeparator` if there is no top-level comma.
///
/// Columns in errors are relative to `text`.
///
/// # Example
/// ```
/// use letcalc::interpreter::parser::operand::extract_operand;
///
/// let (operand, length) = extract_operand("mult(2,3),4)").unwrap();
/// assert_eq!(operand, "mult(2,3)");
/// assert_eq!(length, 9);
///
/// assert!(extract_operand("1)").is_err());
/// assert!(extract_operand("1").is_err());
/// ```
pub fn extract_operand(text: &str) -> ParseResult<(&str, usize)> {
    let items = text.char_indices()
                    .map(|(index, c)| (index, char_delimiter(c)));

    match scan_separator(items) {
        Ok(index) => Ok((&text[..index], index)),
        Err(ScanError::UnmatchedClose(index)) => {
            Err(ParseError::UnmatchedClosingParen { column: index + 1 })
        },
        Err(ScanError::NoSeparator) => Err(ParseError::MissingSeparator { expr:   text.to_string(),
                                                                          column: 1, }),
    }
}

/// Token-level counterpart of [`extract_operand`].
///
/// Returns the tokens of the first operand and the number of tokens it spans;
/// the separator itself is at that index. `column` is used for error reporting
/// when `tokens` is empty.
pub(in crate::interpreter::parser) fn split_operand(tokens: &[(Token, usize)],
                                                    column: usize)
                                                    -> ParseResult<(&[(Token, usize)], usize)> {
    let items = tokens.iter()
                      .enumerate()
                      .map(|(index, (tok, _))| (index, token_delimiter(tok)));

    match scan_separator(items) {
        Ok(index) => Ok((&tokens[..index], index)),
        Err(ScanError::UnmatchedClose(index)) => {
            Err(ParseError::UnmatchedClosingParen { column: tokens[index].1 })
        },
        Err(ScanError::NoSeparator) => {
            Err(ParseError::MissingSeparator { expr:   render(tokens),
                                               column: tokens.first().map_or(column, |(_, c)| *c), })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    #[test]
    fn stops_at_first_top_level_comma() {
        assert_eq!(extract_operand("1,2)").unwrap(), ("1", 1));
        assert_eq!(extract_operand("abc,def,ghi)").unwrap(), ("abc", 3));
    }

    #[test]
    fn skips_nested_commas() {
        let (operand, length) = extract_operand("let(b,10,add(b,b)),let(b,20,add(a,b)))").unwrap();
        assert_eq!(operand, "let(b,10,add(b,b))");
        assert_eq!(length, operand.len());
    }

    #[test]
    fn empty_operand_is_allowed_here() {
        assert_eq!(extract_operand(",1)").unwrap(), ("", 0));
    }

    #[test]
    fn extra_closing_bracket_fails() {
        assert_eq!(extract_operand("add(1,2)),3"),
                   Err(ParseError::UnmatchedClosingParen { column: 9 }));
    }

    #[test]
    fn missing_separator_fails() {
        assert!(matches!(extract_operand("add(1,2)"),
                         Err(ParseError::MissingSeparator { .. })));
        assert!(matches!(extract_operand(""), Err(ParseError::MissingSeparator { .. })));
    }

    #[test]
    fn token_split_agrees_with_text_extraction() {
        let tokens = tokenize("mult(2,3),div(4,x))").unwrap();
        let (operand, consumed) = split_operand(&tokens, 1).unwrap();
        assert_eq!(render(operand), "mult(2,3)");
        assert_eq!(tokens[consumed].0, Token::Comma);
    }

    #[test]
    fn token_split_reports_stray_bracket_column() {
        let tokens = tokenize("1))").unwrap();
        assert_eq!(split_operand(&tokens, 1),
                   Err(ParseError::UnmatchedClosingParen { column: 2 }));
    }
}
