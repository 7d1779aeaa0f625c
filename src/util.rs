/// Input preprocessing.
///
/// Helpers that run on user input before it reaches the parser: a bracket
/// balance check over the whole text and whitespace normalization around
/// brackets and commas.
pub mod preprocess;
