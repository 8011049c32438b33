use crate::{
    ast::Type,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{core::ParseResult, utils::expect},
    },
};

/// Parses a type annotation.
///
/// Function arrows are right-associative: `Int -> Int -> Bool` is
/// `Int -> (Int -> Bool)`.
///
/// Grammar: `type := type_atom ("->" type)*`
///
/// # Example
/// ```
/// use lamb::{
///     ast::Type,
///     interpreter::{lexer::Lexer, parser::types::parse_type},
/// };
///
/// let ty = parse_type(&mut Lexer::new("(Int -> Bool) -> String")).unwrap();
///
/// assert_eq!(ty,
///            Type::Function(Box::new(Type::Function(Box::new(Type::Int),
///                                                   Box::new(Type::Bool))),
///                           Box::new(Type::String)));
/// ```
pub fn parse_type(lexer: &mut Lexer<'_>) -> ParseResult<Type> {
    let mut ty = parse_type_atom(lexer)?;
    while lexer.lookahead()?.0 == Token::Arrow {
        expect(lexer, &Token::Arrow)?;
        ty = Type::Function(Box::new(ty), Box::new(parse_type(lexer)?));
    }
    Ok(ty)
}

/// Parses a single type: a type name or a parenthesized type.
///
/// Grammar: `type_atom := "Int" | "Bool" | "String" | "(" type ")"`
///
/// # Errors
/// Returns `ExpectedType` for any other token.
pub fn parse_type_atom(lexer: &mut Lexer<'_>) -> ParseResult<Type> {
    match lexer.next()? {
        (Token::IntType, _) => Ok(Type::Int),
        (Token::BoolType, _) => Ok(Type::Bool),
        (Token::StringType, _) => Ok(Type::String),
        (Token::LParen, _) => {
            let ty = parse_type(lexer)?;
            expect(lexer, &Token::RParen)?;
            Ok(ty)
        },
        (token, line) => Err(ParseError::ExpectedType { found: token.to_string(),
                                                        line }),
    }
}
