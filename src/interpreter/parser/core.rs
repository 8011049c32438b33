use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::binary::parse_binary,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It starts precedence
/// climbing with a minimum binding power of zero, so every operator is
/// accepted at the top level.
///
/// Tokens after the expression are left in the lexer; use [`parse_program`]
/// to reject them.
///
/// Grammar: `expression := binary`
///
/// # Parameters
/// - `lexer`: Token stream to read from.
///
/// # Returns
/// The parsed expression node.
///
/// # Example
/// ```
/// use lamb::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::Lexer, parser::core::parse_expression},
/// };
///
/// let mut lexer = Lexer::new("1 + 2 * 3");
/// let expr = parse_expression(&mut lexer).unwrap();
///
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
/// ```
pub fn parse_expression(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    parse_binary(lexer, 0)
}

/// Parses a complete program: one expression followed by end of input.
///
/// # Errors
/// Returns `UnexpectedTrailingTokens` if anything follows the expression, and
/// propagates every error of [`parse_expression`].
///
/// # Example
/// ```
/// use lamb::interpreter::{lexer::Lexer, parser::core::parse_program};
///
/// assert!(parse_program(&mut Lexer::new("1 + 2")).is_ok());
/// assert!(parse_program(&mut Lexer::new("1 + 2 )")).is_err());
/// ```
pub fn parse_program(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let expr = parse_expression(lexer)?;

    match lexer.lookahead()? {
        (Token::Eof, _) => Ok(expr),
        (token, line) => Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                                    line:  *line, }),
    }
}
