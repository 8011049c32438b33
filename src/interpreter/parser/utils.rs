use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::core::ParseResult,
    },
};

/// Consumes the next token, requiring it to equal `expected`.
///
/// Only meaningful for tokens without a payload (punctuation and keywords).
///
/// # Parameters
/// - `lexer`: Token stream positioned at the expected token.
/// - `expected`: The token that must come next.
///
/// # Returns
/// The line the token was found on.
///
/// # Errors
/// Returns `UnexpectedToken` naming both the expected and the found token.
pub(in crate::interpreter::parser) fn expect(lexer: &mut Lexer<'_>,
                                             expected: &Token)
                                             -> ParseResult<usize> {
    match lexer.next()? {
        (token, line) if token == *expected => Ok(line),
        (token, line) => Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                                           found: token.to_string(),
                                                           line }),
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns `UnexpectedToken` if the next token is not an identifier. Keywords
/// such as `in` or `List` are not identifiers.
pub(in crate::interpreter::parser) fn parse_identifier(lexer: &mut Lexer<'_>,
                                                       what: &str)
                                                       -> ParseResult<(String, usize)> {
    match lexer.next()? {
        (Token::Identifier(name), line) => Ok((name, line)),
        (token, line) => Err(ParseError::UnexpectedToken { expected: what.to_string(),
                                                           found: token.to_string(),
                                                           line }),
    }
}

/// Consumes the next token if it equals `token`.
///
/// # Returns
/// `true` if the token was present and consumed.
pub(in crate::interpreter::parser) fn accept(lexer: &mut Lexer<'_>,
                                             token: &Token)
                                             -> ParseResult<bool> {
    if lexer.lookahead()?.0 == *token {
        lexer.next()?;
        return Ok(true);
    }
    Ok(false)
}
