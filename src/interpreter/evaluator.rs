/// Core evaluation logic.
///
/// Contains `eval`, which walks an expression in an environment, and
/// `apply`, the single path through which closures and builtins are called.
pub mod core;

/// Binary operator evaluation.
///
/// Implements equality, string concatenation and checked integer arithmetic.
pub mod binary;

/// List operations.
///
/// Implements the ten `List*` operations. Most of them change their list in
/// place, which every holder of that list observes.
pub mod list;

/// Native functions.
///
/// The registry of builtins bound in the initial environment.
pub mod builtin;
