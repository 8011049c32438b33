//! # lamb
//!
//! lamb is a small functional language written in Rust.
//! It tokenizes, parses and evaluates expressions with closures, lexical
//! scoping, recursive `let` and a fixed set of built-in list operations.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::eval,
        lexer::{Lexer, Spanned},
        parser::core::parse_program,
        value::{core::Value, environment::Environment},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression forms, literals, operators and list operations.
/// - Attaches source lines to AST nodes for error reporting.
/// - Describes the type annotations accepted on lambda parameters.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating code. Each error carries the line it occurred on, and every
/// error belongs to one `ErrorKind` category.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Implements `std::error::Error` for integration with callers.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// Conversions between the language's `i64` integers and host indices and
/// characters, without silent truncation.
pub mod util;

/// Tokenizes a source string.
///
/// The returned tokens are paired with their line numbers and always end with
/// `Token::Eof`.
///
/// # Example
/// ```
/// use lamb::{interpreter::lexer::Token, tokenize};
///
/// let tokens = tokenize("x + 1").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".to_string()), Token::Plus, Token::Integer(1), Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    Lexer::new(source).tokenize()
}

/// Parses a source string into a single expression.
///
/// The whole input must be consumed; trailing tokens are an error.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_program(&mut Lexer::new(source))
}

/// Lexes, parses and evaluates a program in the initial environment.
///
/// The initial environment binds the builtins `firstChar`, `remainingChars`,
/// `charCode` and `codeChar`.
///
/// # Examples
/// ```
/// use lamb::{evaluate, interpreter::value::core::Value};
///
/// let source = "let rec fact = \\n => if n == 0 then 1 else n * fact (n - 1) in fact 5";
/// assert_eq!(evaluate(source).unwrap(), Value::Int(120));
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    let expr = parse(source)?;
    Ok(eval(&Environment::initial(), &expr)?)
}

/// Returns the final evaluation result after execution.
///
/// This function parses and evaluates the program in the provided source
/// string. If `auto_print` is set, the resulting value is printed to standard
/// output.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use lamb::get_result;
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let source = "let x = 2 in x + 2";
/// assert!(get_result(source, false).is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let source = "y + 1"; // 'y' is not defined
/// assert!(get_result(source, false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Value, Box<dyn std::error::Error>> {
    let value = evaluate(source)?;

    if auto_print {
        println!("{value}");
    }

    Ok(value)
}
