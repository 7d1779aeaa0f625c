#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing, preprocessing or
/// parsing.
pub enum ParseError {
    /// A character that does not start any token, including whitespace.
    UnexpectedCharacter {
        /// The offending text.
        found:  String,
        /// The column where the error occurred.
        column: usize,
    },
    /// An operator form does not end with `)`.
    MissingClosingParen {
        /// The operator form as written.
        expr:   String,
        /// The column where the form starts.
        column: usize,
    },
    /// A `)` was found before the operand it belongs to was complete.
    UnmatchedClosingParen {
        /// The column of the stray bracket.
        column: usize,
    },
    /// No top-level comma follows an operand.
    MissingSeparator {
        /// The text that was scanned for a separator.
        expr:   String,
        /// The column where the scan started.
        column: usize,
    },
    /// The text is not a number, a variable or a known operator form.
    InvalidExpression {
        /// The expression as written. Empty for a missing operand.
        expr:   String,
        /// The column where the expression starts.
        column: usize,
    },
    /// An identifier followed by `(` that is not one of the operators.
    UnknownOperator {
        /// The operator name.
        name:   String,
        /// The column where the error occurred.
        column: usize,
    },
    /// The first operand of `let` is not a single identifier.
    InvalidBindingName {
        /// The operand as written.
        name:   String,
        /// The column where the operand starts.
        column: usize,
    },
    /// Opening and closing brackets of the whole input do not match.
    UnbalancedBrackets {
        /// The column where the imbalance was detected.
        column: usize,
    },
    /// A digit string that does not fit in a 32-bit signed integer.
    InvalidNumber {
        /// The digits as written.
        digits: String,
        /// The column where the literal starts.
        column: usize,
    },
}

impl ParseError {
    /// The 1-based column where the error was detected.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { column, .. }
            | Self::MissingClosingParen { column, .. }
            | Self::UnmatchedClosingParen { column }
            | Self::MissingSeparator { column, .. }
            | Self::InvalidExpression { column, .. }
            | Self::UnknownOperator { column, .. }
            | Self::InvalidBindingName { column, .. }
            | Self::UnbalancedBrackets { column }
            | Self::InvalidNumber { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, column } => {
                write!(f, "Error at column {column}: Unexpected character {found:?}.")
            },

            Self::MissingClosingParen { expr, column } => write!(f,
                                                                 "Error at column {column}: Expression '{expr}' does not end with ')'."),

            Self::UnmatchedClosingParen { column } => {
                write!(f, "Error at column {column}: Extra closing bracket.")
            },

            Self::MissingSeparator { expr, column } => write!(f,
                                                              "Error at column {column}: No operand separator found in '{expr}'."),

            Self::InvalidExpression { expr, column } => write!(f,
                                                               "Error at column {column}: Invalid expression '{expr}'. Must be one of add/sub/mult/div/let, a number or a variable."),

            Self::UnknownOperator { name, column } => {
                write!(f, "Error at column {column}: Unknown operator '{name}'.")
            },

            Self::InvalidBindingName { name, column } => write!(f,
                                                                "Error at column {column}: '{name}' is not a valid variable name."),

            Self::UnbalancedBrackets { column } => {
                write!(f, "Error at column {column}: Brackets do not match.")
            },

            Self::InvalidNumber { digits, column } => write!(f,
                                                             "Error at column {column}: Number '{digits}' is not a valid 32-bit integer."),
        }
    }
}

impl std::error::Error for ParseError {}
