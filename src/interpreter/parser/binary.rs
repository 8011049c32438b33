use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Lexer, Token},
        parser::{atom::parse_application, core::ParseResult},
    },
};

/// Parses binary operator expressions by precedence climbing.
///
/// A term is parsed as an application. Then, repeatedly, the next token is
/// peeked: if it is an operator whose left binding power is at least
/// `min_binding_power`, it is consumed and the right-hand side is parsed
/// recursively at the operator's right binding power.
///
/// Binding powers come from [`BinaryOperator::binding_power`]:
///
/// ```text
///     ==          (2, 1)
///     + - #       (3, 4)
///     * / %       (5, 6)
/// ```
///
/// The arithmetic operators group to the left. Equality groups to the right,
/// so `a == b == c` is `a == (b == c)`.
///
/// Grammar: `binary := application (binop binary)*`
///
/// # Parameters
/// - `lexer`: Token stream.
/// - `min_binding_power`: Operators binding more loosely than this end the
///   expression.
///
/// # Returns
/// A possibly nested `Expr::BinaryOp` tree.
pub fn parse_binary(lexer: &mut Lexer<'_>, min_binding_power: u8) -> ParseResult<Expr> {
    let mut left = parse_application(lexer)?;

    loop {
        let (token, line) = lexer.lookahead()?;
        let Some(op) = token_to_binary_operator(token) else {
            break;
        };
        let line = *line;

        let (left_bp, right_bp) = op.binding_power();
        if min_binding_power > left_bp {
            break;
        }
        lexer.next()?; // consume operator

        let right = parse_binary(lexer, right_bp)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use lamb::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Hash), Some(BinaryOperator::Concat));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::EqualEqual => Some(BinaryOperator::Equality),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Hash => Some(BinaryOperator::Concat),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}
