#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A variable was referenced without an enclosing `let`.
    UndeclaredVariable {
        /// The name of the variable.
        name:   String,
        /// The column where the error occurred.
        column: usize,
    },
    /// A `let` tried to bind a name that is already live.
    Redeclaration {
        /// The name of the variable.
        name:   String,
        /// The column where the error occurred.
        column: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The `div` form whose divisor evaluated to zero.
        expr:   String,
        /// The column where the error occurred.
        column: usize,
    },
    /// Arithmetic result outside the 32-bit signed range.
    Overflow {
        /// The operator form that overflowed.
        expr:   String,
        /// The column where the error occurred.
        column: usize,
    },
}

impl RuntimeError {
    /// The 1-based column where the error was detected.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UndeclaredVariable { column, .. }
            | Self::Redeclaration { column, .. }
            | Self::DivisionByZero { column, .. }
            | Self::Overflow { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndeclaredVariable { name, column } => {
                write!(f, "Error at column {column}: Undeclared variable '{name}'.")
            },
            Self::Redeclaration { name, column } => {
                write!(f, "Error at column {column}: Variable '{name}' already declared.")
            },
            Self::DivisionByZero { expr, column } => {
                write!(f, "Error at column {column}: Division by zero in '{expr}'.")
            },
            Self::Overflow { expr, column } => write!(f,
                                                      "Error at column {column}: Integer overflow while computing '{expr}'."),
        }
    }
}

impl std::error::Error for RuntimeError {}
