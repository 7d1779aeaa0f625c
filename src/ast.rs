/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant models one syntactic form of the language and records the
/// 1-based column where it starts, for error reporting. `Display` renders a
/// node back into canonical source text without whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value:  i32,
        /// Column in the source text.
        column: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:   String,
        /// Column in the source text.
        column: usize,
    },
    /// `add`, `sub`, `mult` or `div` applied to two operands.
    BinaryOp {
        /// The operator.
        op:     BinaryOperator,
        /// First operand.
        left:   Box<Self>,
        /// Second operand.
        right:  Box<Self>,
        /// Column in the source text.
        column: usize,
    },
    /// `let(name, value, body)`.
    Let {
        /// The name being bound.
        name:   String,
        /// Expression producing the bound value; `name` is not visible in it.
        value:  Box<Self>,
        /// Expression evaluated with `name` bound; the result of the form.
        body:   Box<Self>,
        /// Column in the source text.
        column: usize,
    },
}

impl Expr {
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { column, .. }
            | Self::Variable { column, .. }
            | Self::BinaryOp { column, .. }
            | Self::Let { column, .. } => *column,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mult,
    Div,
}

impl BinaryOperator {
    /// Looks up the operator spelled `name`, if any.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Self::Add),
            "sub" => Some(Self::Sub),
            "mult" => Some(Self::Mult),
            "div" => Some(Self::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mult => "mult",
            Self::Div => "div",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::BinaryOp { op, left, right, .. } => write!(f, "{op}({left},{right})"),
            Self::Let { name, value, body, .. } => write!(f, "let({name},{value},{body})"),
        }
    }
}
