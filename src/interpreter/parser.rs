/// Parser entry points.
///
/// Declares the `ParseResult` alias and the functions that parse a single
/// expression or a complete program.
pub mod core;

/// Atom and application parsing.
///
/// Handles literals, list literals, list operations, lambdas, `let`, `if`,
/// identifiers, parenthesized expressions and left-associative application
/// by juxtaposition.
pub mod atom;

/// Binary operator parsing.
///
/// Implements precedence climbing over the fixed operator table, driven by
/// each operator's binding powers.
pub mod binary;

/// Type annotation parsing.
///
/// Parses the annotations allowed on lambda binders. They are kept in the AST
/// but not used by evaluation.
pub mod types;

/// Utility functions for the parser.
///
/// Token expectation helpers shared by the other parser modules.
pub mod utils;
