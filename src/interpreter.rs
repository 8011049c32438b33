/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser in a persistent
/// environment, creating closures for lambdas and applying them with strict,
/// lexically scoped call-by-value semantics.
///
/// # Responsibilities
/// - Evaluates every expression form, including `let rec`.
/// - Runs the list operations and the builtin functions.
/// - Reports runtime errors such as unbound variables, type mismatches and
///   out-of-range indices.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens paired
/// with their line numbers: keywords, type names, list operations, literals,
/// identifiers, operators and punctuation.
///
/// # Responsibilities
/// - Converts the input characters into tokens with one token of lookahead.
/// - Tracks line numbers for diagnostics.
/// - Reports unterminated strings and unexpected characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Atoms and keyword forms are parsed by recursive descent; binary operators
/// by precedence climbing over a fixed binding-power table.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes that carry their source line.
/// - Checks list literals for a single element kind.
/// - Reports syntax errors with the line they occurred on.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, booleans, strings, mutable homogeneous lists, closures and
/// builtins, together with the persistent environment closures capture.
pub mod value;
