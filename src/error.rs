/// Parsing errors.
///
/// Defines all error types that can occur before evaluation starts: stray
/// characters, malformed operator forms, missing separators, unbalanced
/// brackets and literals that do not fit in an `i32`.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression: undeclared or redeclared variables, division by zero and
/// overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The category an [`EvalError`] belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input of any kind.
    Syntax,
    /// A `let` bound a name that is already live.
    Redeclaration,
    /// A variable was used outside of any `let` binding it.
    UndeclaredVariable,
    /// A `div` with a zero divisor.
    DivisionByZero,
    /// A digit string that cannot be represented as an `i32`.
    NumberFormat,
    /// An arithmetic result outside the `i32` range.
    Overflow,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Syntax => "syntax error",
            Self::Redeclaration => "redeclaration error",
            Self::UndeclaredVariable => "undeclared variable error",
            Self::DivisionByZero => "division by zero error",
            Self::NumberFormat => "number format error",
            Self::Overflow => "overflow error",
        };
        write!(f, "{kind}")
    }
}

/// Any error produced by a top-level evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The input could not be lexed or parsed.
    Parse(ParseError),
    /// The parsed expression failed while being evaluated.
    Runtime(RuntimeError),
}

impl EvalError {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use letcalc::{error::ErrorKind, evaluate_top_level};
    ///
    /// let err = evaluate_top_level("div(5,0)").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::InvalidNumber { .. }) => ErrorKind::NumberFormat,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::UndeclaredVariable { .. }) => {
                ErrorKind::UndeclaredVariable
            },
            Self::Runtime(RuntimeError::Redeclaration { .. }) => ErrorKind::Redeclaration,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::Overflow { .. }) => ErrorKind::Overflow,
        }
    }

    /// The 1-based column where the error was detected.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Parse(e) => e.column(),
            Self::Runtime(e) => e.column(),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
