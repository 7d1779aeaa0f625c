/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, variable lookup and the `let`
/// binding discipline.
pub mod core;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic for `add`, `sub`, `mult` and `div`.
pub mod binary;

/// Variable storage.
///
/// Defines the flat name-to-value map shared by one evaluation.
pub mod scope;
