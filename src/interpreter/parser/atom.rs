use std::rc::Rc;

use crate::{
    ast::{Expr, ListOperation, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{
            core::{ParseResult, parse_expression},
            types::parse_type,
            utils::{accept, expect, parse_identifier},
        },
    },
};

/// Parses left-associative function application.
///
/// Atoms are consumed greedily and folded left to right, so `f a b` becomes
/// `(f a) b`. Application binds tighter than every binary operator.
///
/// Grammar: `application := atom+`
///
/// # Errors
/// Returns `ExpectedExpression` if the next token cannot start an atom.
///
/// # Example
/// ```
/// use lamb::{
///     ast::Expr,
///     interpreter::{lexer::Lexer, parser::atom::parse_application},
/// };
///
/// let expr = parse_application(&mut Lexer::new("f a b")).unwrap();
///
/// let Expr::Application { function, .. } = expr else { panic!() };
/// assert!(matches!(*function, Expr::Application { .. }));
/// ```
pub fn parse_application(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let Some(mut function) = parse_atom(lexer)? else {
        let (token, line) = lexer.lookahead()?;
        return Err(ParseError::ExpectedExpression { found: token.to_string(),
                                                    line:  *line, });
    };

    while let Some(argument) = parse_atom(lexer)? {
        let line = function.line_number();
        function = Expr::Application { function: Box::new(function),
                                       argument: Box::new(argument),
                                       line };
    }

    Ok(function)
}

/// Parses an atom, the highest-precedence form of expression.
///
/// Atoms are:
/// - integer, boolean and string literals
/// - list literals (`List[...]`)
/// - list operations with their fixed number of atom operands
/// - lambdas (`\x => body`)
/// - `let` and `if` expressions
/// - identifiers
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     atom := INT | BOOL | STRING
///           | "List" "[" atom ("," atom)* "]"
///           | listop atom [atom [atom]]
///           | "\" IDENT [":" type] "=>" expression
///           | "let" ["rec"] IDENT "=" expression "in" expression
///           | "if" expression "then" expression "else" expression
///           | IDENT
///           | "(" expression ")"
/// ```
///
/// # Returns
/// `Some(expr)`, or `None` without consuming anything if the next token
/// cannot start an atom.
pub fn parse_atom(lexer: &mut Lexer<'_>) -> ParseResult<Option<Expr>> {
    let expr = match lexer.lookahead()? {
        (Token::Integer(_) | Token::Bool(_) | Token::String(_), _) => parse_literal(lexer)?,
        (Token::List, _) => parse_list_literal(lexer)?,
        (Token::ListOperation(_), _) => parse_list_operation(lexer)?,
        (Token::Backslash, _) => parse_lambda(lexer)?,
        (Token::Let, _) => parse_let(lexer)?,
        (Token::If, _) => parse_if(lexer)?,
        (Token::Identifier(_), _) => parse_variable(lexer)?,
        (Token::LParen, _) => parse_grouping(lexer)?,
        _ => return Ok(None),
    };
    Ok(Some(expr))
}

/// Parses an atom that must be present.
fn parse_required_atom(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    match parse_atom(lexer)? {
        Some(expr) => Ok(expr),
        None => {
            let (token, line) = lexer.lookahead()?;
            Err(ParseError::ExpectedExpression { found: token.to_string(),
                                                 line:  *line, })
        },
    }
}

fn parse_literal(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let (value, line) = match lexer.next()? {
        (Token::Integer(n), line) => (LiteralValue::Integer(n), line),
        (Token::Bool(b), line) => (LiteralValue::Bool(b), line),
        (Token::String(s), line) => (LiteralValue::String(s), line),
        (token, line) => {
            return Err(ParseError::UnexpectedToken { expected: "a literal".to_string(),
                                                     found: token.to_string(),
                                                     line });
        },
    };
    Ok(Expr::Literal { value, line })
}

fn parse_variable(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let (name, line) = parse_identifier(lexer, "an identifier")?;
    Ok(Expr::Variable { name, line })
}

/// Parses `( expression )`.
fn parse_grouping(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    expect(lexer, &Token::LParen)?;
    let inner = parse_expression(lexer)?;
    expect(lexer, &Token::RParen)?;
    Ok(inner)
}

/// Parses a list literal of the form `List[ atom1, atom2, ..., atomN ]`.
///
/// At least one element is required. Every element must be the same kind of
/// node as the first one; `List[1, x]` is rejected here even though `x` might
/// hold an integer at runtime.
///
/// # Errors
/// - `EmptyList` for `List[]`.
/// - `MalformedList` for a leading, doubled or trailing comma.
/// - `HeterogeneousList` when an element's node kind differs from the first.
/// - `UnexpectedToken` when something other than `,` or `]` follows an
///   element.
///
/// # Example
/// ```
/// use lamb::{
///     ast::{Expr, ExprTag},
///     interpreter::{lexer::Lexer, parser::atom::parse_list_literal},
/// };
///
/// let expr = parse_list_literal(&mut Lexer::new("List[1, 2, 3]")).unwrap();
/// assert!(matches!(expr, Expr::ListLiteral { element_tag: ExprTag::Integer, .. }));
///
/// assert!(parse_list_literal(&mut Lexer::new("List[1, true]")).is_err());
/// ```
pub fn parse_list_literal(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let line = expect(lexer, &Token::List)?;
    expect(lexer, &Token::LBracket)?;

    match lexer.lookahead()? {
        (Token::RBracket, line) => return Err(ParseError::EmptyList { line: *line }),
        (Token::Comma, line) => return Err(ParseError::MalformedList { line: *line }),
        _ => {},
    }

    let first = parse_required_atom(lexer)?;
    let element_tag = first.tag();
    let mut elements = vec![first];

    while lexer.lookahead()?.0 != Token::RBracket {
        expect(lexer, &Token::Comma)?;

        if let (Token::Comma | Token::RBracket, line) = lexer.lookahead()? {
            return Err(ParseError::MalformedList { line: *line });
        }

        let element = parse_required_atom(lexer)?;
        if element.tag() != element_tag {
            return Err(ParseError::HeterogeneousList { expected: element_tag,
                                                       found:    element.tag(),
                                                       line:     element.line_number(), });
        }
        elements.push(element);
    }
    expect(lexer, &Token::RBracket)?;

    Ok(Expr::ListLiteral { element_tag,
                           elements,
                           line })
}

/// Parses a list operation keyword followed by its operands.
///
/// The number of operands is fixed per operation (see
/// [`ListOperation::arity`]). Operands are atoms, so anything longer than a
/// single token must be parenthesized: `ListGetValue xs (n - 1)`.
///
/// # Errors
/// Returns `MissingArgument` when fewer atoms than required follow the
/// keyword.
pub fn parse_list_operation(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let (op, line) = match lexer.next()? {
        (Token::ListOperation(op), line) => (op, line),
        (token, line) => {
            return Err(ParseError::UnexpectedToken { expected: "a list operation".to_string(),
                                                     found: token.to_string(),
                                                     line });
        },
    };

    let first = Box::new(parse_operand(lexer, op, line)?);
    match op.arity() {
        1 => Ok(Expr::UnaryListOp { op, first, line }),
        2 => {
            let second = Box::new(parse_operand(lexer, op, line)?);
            Ok(Expr::BinaryListOp { op,
                                    first,
                                    second,
                                    line })
        },
        _ => {
            let second = Box::new(parse_operand(lexer, op, line)?);
            let third = Box::new(parse_operand(lexer, op, line)?);
            Ok(Expr::TernaryListOp { op,
                                     first,
                                     second,
                                     third,
                                     line })
        },
    }
}

fn parse_operand(lexer: &mut Lexer<'_>, operation: ListOperation, line: usize) -> ParseResult<Expr> {
    parse_atom(lexer)?.ok_or(ParseError::MissingArgument { operation, line })
}

/// Parses a lambda `\name => body` with an optional binder annotation
/// `\name : type => body`.
///
/// The body extends as far to the right as possible.
pub fn parse_lambda(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let line = expect(lexer, &Token::Backslash)?;
    let (param, _) = parse_identifier(lexer, "a binder")?;

    let param_type = if accept(lexer, &Token::Colon)? {
        Some(parse_type(lexer)?)
    } else {
        None
    };

    expect(lexer, &Token::FatArrow)?;
    let body = parse_expression(lexer)?;

    Ok(Expr::Lambda { param,
                      param_type,
                      body: Rc::new(body),
                      line })
}

/// Parses `let [rec] name = value in body`.
pub fn parse_let(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let line = expect(lexer, &Token::Let)?;
    let recursive = accept(lexer, &Token::Rec)?;
    let (name, _) = parse_identifier(lexer, "a binder")?;

    expect(lexer, &Token::Equals)?;
    let value = parse_expression(lexer)?;
    expect(lexer, &Token::In)?;
    let body = parse_expression(lexer)?;

    Ok(Expr::Let { recursive,
                   name,
                   value: Box::new(value),
                   body: Box::new(body),
                   line })
}

/// Parses `if condition then a else b`. Both branches are required.
pub fn parse_if(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let line = expect(lexer, &Token::If)?;
    let condition = parse_expression(lexer)?;
    expect(lexer, &Token::Then)?;
    let then_branch = parse_expression(lexer)?;
    expect(lexer, &Token::Else)?;
    let else_branch = parse_expression(lexer)?;

    Ok(Expr::IfExpr { condition: Box::new(condition),
                      then_branch: Box::new(then_branch),
                      else_branch: Box::new(else_branch),
                      line })
}
