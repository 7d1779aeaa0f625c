/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator walks the AST depth-first, performs checked integer
/// arithmetic and manages variable bindings introduced by `let`.
///
/// # Responsibilities
/// - Evaluates AST nodes for every supported form.
/// - Binds and releases `let` variables in a shared scope.
/// - Reports runtime errors such as division by zero or redeclaration.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw text and produces numbers, identifiers, brackets
/// and commas, each tagged with the column it starts at.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Operator forms are split into operands by bracket-depth scanning and each
/// operand is parsed recursively.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting errors with column information.
pub mod parser;
