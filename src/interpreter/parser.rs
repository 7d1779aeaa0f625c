/// Entry points for parsing expressions.
///
/// Classifies a token sequence as a literal, a variable or an operator form
/// and returns the corresponding AST node.
pub mod core;
/// Operator and `let` forms.
///
/// Validates the shape of `NAME(...)` forms and splits them into operands.
pub mod form;
/// Operand extraction.
///
/// Finds where the first operand of an operator form ends by tracking bracket
/// depth, both over raw text and over tokens.
pub mod operand;
