use lamb::{
    ast::ListOperation,
    error::{ErrorKind, ParseError},
    interpreter::lexer::{Lexer, Token},
    tokenize,
};

fn kinds(source: &str) -> Vec<Token> {
    tokenize(source).unwrap().into_iter().map(|(token, _)| token).collect()
}

#[test]
fn operators_in_order() {
    assert_eq!(kinds("-> => == / * + - %"),
               vec![Token::Arrow,
                    Token::FatArrow,
                    Token::EqualEqual,
                    Token::Slash,
                    Token::Star,
                    Token::Plus,
                    Token::Minus,
                    Token::Percent,
                    Token::Eof]);
}

#[test]
fn punctuation_and_concat() {
    assert_eq!(kinds("( ) [ ] , : \\ = #"),
               vec![Token::LParen,
                    Token::RParen,
                    Token::LBracket,
                    Token::RBracket,
                    Token::Comma,
                    Token::Colon,
                    Token::Backslash,
                    Token::Equals,
                    Token::Hash,
                    Token::Eof]);
}

#[test]
fn keywords_and_type_names() {
    assert_eq!(kinds("if then else let rec in Int Bool String List"),
               vec![Token::If,
                    Token::Then,
                    Token::Else,
                    Token::Let,
                    Token::Rec,
                    Token::In,
                    Token::IntType,
                    Token::BoolType,
                    Token::StringType,
                    Token::List,
                    Token::Eof]);
}

#[test]
fn every_list_operation_keyword() {
    for op in ListOperation::ALL {
        assert_eq!(kinds(op.keyword()), vec![Token::ListOperation(op), Token::Eof]);
    }
}

#[test]
fn keywords_only_match_whole_words() {
    assert_eq!(kinds("iffy ListMapper truex in_"),
               vec![Token::Identifier("iffy".to_string()),
                    Token::Identifier("ListMapper".to_string()),
                    Token::Identifier("truex".to_string()),
                    Token::Identifier("in_".to_string()),
                    Token::Eof]);
}

#[test]
fn literals_carry_payloads() {
    assert_eq!(kinds(r#"42 true false "a b" $x _y1"#),
               vec![Token::Integer(42),
                    Token::Bool(true),
                    Token::Bool(false),
                    Token::String("a b".to_string()),
                    Token::Identifier("$x".to_string()),
                    Token::Identifier("_y1".to_string()),
                    Token::Eof]);
}

#[test]
fn lines_are_tracked() {
    let tokens = tokenize("a\nb\n\n  c").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();

    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn newlines_inside_strings_advance_the_line() {
    let tokens = tokenize("\"one\ntwo\" x").unwrap();

    assert_eq!(tokens[0], (Token::String("one\ntwo".to_string()), 1));
    assert_eq!(tokens[1], (Token::Identifier("x".to_string()), 2));
}

#[test]
fn end_of_input_is_repeated() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next().unwrap().0, Token::Identifier("x".to_string()));
    for _ in 0..3 {
        assert_eq!(lexer.lookahead().unwrap().0, Token::Eof);
        assert_eq!(lexer.next().unwrap().0, Token::Eof);
    }
}

#[test]
fn lookahead_does_not_consume() {
    let mut lexer = Lexer::new("1 2");

    assert_eq!(lexer.lookahead().unwrap().0, Token::Integer(1));
    assert_eq!(lexer.lookahead().unwrap().0, Token::Integer(1));
    assert_eq!(lexer.next().unwrap().0, Token::Integer(1));
    assert_eq!(lexer.next().unwrap().0, Token::Integer(2));
}

#[test]
fn unterminated_string_is_error() {
    let err = tokenize("x \"abc").unwrap_err();

    assert!(matches!(err, ParseError::UnterminatedString { line: 1 }));
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn unexpected_character_is_error() {
    let err = tokenize("1 +\n@").unwrap_err();

    assert_eq!(err.line_number(), 2);
    assert!(matches!(err, ParseError::UnexpectedCharacter { .. }));
}

#[test]
fn oversized_integer_is_error() {
    let err = tokenize("99999999999999999999").unwrap_err();

    assert!(matches!(err, ParseError::LiteralTooLarge { line: 1 }));
}

#[test]
fn largest_integer_is_accepted() {
    assert_eq!(kinds("9223372036854775807"), vec![Token::Integer(i64::MAX), Token::Eof]);
}
