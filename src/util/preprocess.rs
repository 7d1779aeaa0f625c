use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Characters around which whitespace carries no meaning.
const DELIMITERS: [char; 3] = ['(', ')', ','];

/// Checks that brackets in `text` are balanced.
///
/// At no point may there be more closing brackets than opening ones, and the
/// counts must be equal at the end.
///
/// ## Example
/// ```
/// use letcalc::util::preprocess::brackets_balanced;
///
/// assert!(brackets_balanced("add(1,mult(2,3))"));
/// assert!(!brackets_balanced("add(1,2"));
/// assert!(!brackets_balanced(")("));
/// ```
#[must_use]
pub fn brackets_balanced(text: &str) -> bool {
    first_imbalance(text).is_none()
}

/// Returns the byte offset where bracket balance first fails, if it does.
///
/// For a missing closing bracket this is the end of the text.
fn first_imbalance(text: &str) -> Option<usize> {
    let mut depth = 0usize;

    for (index, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Some(index);
                }
                depth -= 1;
            },
            _ => {},
        }
    }

    (depth != 0).then_some(text.len())
}

/// Removes whitespace that carries no meaning.
///
/// Any run of whitespace touching `(`, `)` or `,` is removed, as is leading
/// and trailing whitespace. Whitespace between two other characters, such as
/// inside a name or a number, is kept so that the parser can reject it.
///
/// ## Example
/// ```
/// use letcalc::util::preprocess::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  let ( a ,\t5 , add( a,a ) ) "), "let(a,5,add(a,a))");
/// assert_eq!(normalize_whitespace("add(1 2, 3)"), "add(1 2,3)");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut pending = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            pending.push(c);
            continue;
        }

        let touches_delimiter = DELIMITERS.contains(&c)
                                || normalized.ends_with(|prev: char| DELIMITERS.contains(&prev));
        if !normalized.is_empty() && !touches_delimiter {
            normalized.push_str(&pending);
        }
        pending.clear();
        normalized.push(c);
    }

    normalized
}

/// Prepares user input for the parser.
///
/// Checks bracket balance over the raw text, then normalizes whitespace.
///
/// ## Errors
/// Returns `ParseError::UnbalancedBrackets` if the brackets do not match.
pub fn prepare(text: &str) -> ParseResult<String> {
    if let Some(index) = first_imbalance(text) {
        return Err(ParseError::UnbalancedBrackets { column: index + 1 });
    }

    Ok(normalize_whitespace(text))
}
