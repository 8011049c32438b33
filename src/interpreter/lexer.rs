use logos::Logos;

use crate::{
    ast::ListOperation,
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `let`
    #[token("let")]
    Let,
    /// `rec`
    #[token("rec")]
    Rec,
    /// `in`
    #[token("in")]
    In,
    /// The type name `Int`.
    #[token("Int")]
    IntType,
    /// The type name `Bool`.
    #[token("Bool")]
    BoolType,
    /// The type name `String`.
    #[token("String")]
    StringType,
    /// `List`, which starts a list literal.
    #[token("List")]
    List,
    /// One of the ten list operation keywords, such as `ListMap`.
    #[token("ListGetSize", |_| ListOperation::GetSize)]
    #[token("ListIsEmpty", |_| ListOperation::IsEmpty)]
    #[token("ListJoin", |_| ListOperation::Join)]
    #[token("ListAppend", |_| ListOperation::Append)]
    #[token("ListRemoveAtPosition", |_| ListOperation::RemoveAtPosition)]
    #[token("ListGetValue", |_| ListOperation::GetValue)]
    #[token("ListInsertAt", |_| ListOperation::InsertAt)]
    #[token("ListMap", |_| ListOperation::Map)]
    #[token("ListFilter", |_| ListOperation::Filter)]
    #[token("ListFold", |_| ListOperation::Fold)]
    ListOperation(ListOperation),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// Integer literal tokens, such as `42`. There are no signed literals.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens. The content is taken verbatim; there are no
    /// escape sequences.
    #[regex(r#""[^"]*""#, parse_string)]
    String(String),
    /// Identifier tokens; variable names such as `x` or `firstChar`.
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `\`
    #[token("\\")]
    Backslash,
    /// `->`
    #[token("->")]
    Arrow,
    /// `=>`
    #[token("=>")]
    FatArrow,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `#`
    #[token("#")]
    Hash,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input. Returned by [`Lexer::next`] once the source is
    /// exhausted, and on every call after that.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::If => write!(f, "'if'"),
            Self::Then => write!(f, "'then'"),
            Self::Else => write!(f, "'else'"),
            Self::Let => write!(f, "'let'"),
            Self::Rec => write!(f, "'rec'"),
            Self::In => write!(f, "'in'"),
            Self::IntType => write!(f, "'Int'"),
            Self::BoolType => write!(f, "'Bool'"),
            Self::StringType => write!(f, "'String'"),
            Self::List => write!(f, "'List'"),
            Self::ListOperation(op) => write!(f, "'{op}'"),
            Self::Bool(b) => write!(f, "boolean '{b}'"),
            Self::Integer(n) => write!(f, "integer '{n}'"),
            Self::String(s) => write!(f, "string \"{s}\""),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Comma => write!(f, "','"),
            Self::Colon => write!(f, "':'"),
            Self::Backslash => write!(f, "'\\'"),
            Self::Arrow => write!(f, "'->'"),
            Self::FatArrow => write!(f, "'=>'"),
            Self::Equals => write!(f, "'='"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::Hash => write!(f, "'#'"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token paired with the source line it starts on.
pub type Spanned = (Token, usize);

/// Streams tokens out of source text on demand.
///
/// Tokens are produced lazily from the underlying `logos` lexer. A single
/// token of lookahead is kept in a buffer: [`Lexer::lookahead`] fills it and
/// [`Lexer::next`] drains it before pulling anything new.
///
/// ## Example
/// ```
/// use lamb::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("let x");
///
/// assert_eq!(lexer.lookahead().unwrap().0, Token::Let);
/// assert_eq!(lexer.next().unwrap().0, Token::Let);
/// assert_eq!(lexer.next().unwrap().0, Token::Identifier("x".to_string()));
/// assert_eq!(lexer.next().unwrap().0, Token::Eof);
/// assert_eq!(lexer.next().unwrap().0, Token::Eof);
/// ```
pub struct Lexer<'src> {
    inner:  logos::Lexer<'src, Token>,
    peeked: Option<Spanned>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:  Token::lexer_with_extras(source, LexerExtras { line: 1 }),
               peeked: None, }
    }

    /// Returns the next token and consumes it.
    ///
    /// # Errors
    /// Returns `UnterminatedString`, `LiteralTooLarge` or
    /// `UnexpectedCharacter` when the input at the cursor is not a token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> ParseResult<Spanned> {
        match self.peeked.take() {
            Some(spanned) => Ok(spanned),
            None => self.advance(),
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    /// Same as [`Lexer::next`].
    pub fn lookahead(&mut self) -> ParseResult<&Spanned> {
        let spanned = match self.peeked.take() {
            Some(spanned) => spanned,
            None => self.advance()?,
        };
        Ok(self.peeked.insert(spanned))
    }

    /// Drains the remaining input into a vector, ending with `Eof`.
    ///
    /// # Errors
    /// Fails on the first input that is not a token.
    pub fn tokenize(mut self) -> ParseResult<Vec<Spanned>> {
        let mut tokens = Vec::new();
        loop {
            let spanned = self.next()?;
            let done = spanned.0 == Token::Eof;
            tokens.push(spanned);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn advance(&mut self) -> ParseResult<Spanned> {
        let Some(result) = self.inner.next() else {
            return Ok((Token::Eof, self.inner.extras.line));
        };
        let line = self.inner.extras.line;

        match result {
            Ok(token) => {
                if let Token::String(s) = &token {
                    self.inner.extras.line += s.matches('\n').count();
                }
                Ok((token, line))
            },
            Err(()) => Err(self.classify_error(line)),
        }
    }

    fn classify_error(&self, line: usize) -> ParseError {
        let slice = self.inner.slice();
        if slice.starts_with('"') {
            ParseError::UnterminatedString { line }
        } else if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
            ParseError::LiteralTooLarge { line }
        } else {
            ParseError::UnexpectedCharacter { character: slice.to_string(),
                                              line }
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the digits do not fit into an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Strips the surrounding quotes from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
