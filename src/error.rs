/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unexpected or missing tokens, malformed list
/// literals, unterminated strings and characters the lexer does not know.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unbound variables, out-of-range list
/// indices, misshapen fold functions and arithmetic failures.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The category an error belongs to.
///
/// Every [`ParseError`] and [`RuntimeError`] maps onto exactly one kind, which
/// lets callers branch on the failure class without matching every variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unexpected or missing token, malformed literal, unknown character.
    Syntax,
    /// An operand had the wrong runtime kind, or a list would become
    /// heterogeneous.
    TypeMismatch,
    /// A name was not bound in any enclosing scope.
    UnboundVariable,
    /// A list index was outside the list.
    IndexOutOfRange,
    /// A fold function was not curried, or a list operation node had the
    /// wrong number of operands.
    ArityOrShape,
    /// The target of an application was not a function.
    NotAFunction,
    /// Division by zero or integer overflow.
    Arithmetic,
    /// A builtin received a value of the right kind but outside its domain.
    InvalidArgument,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Syntax => "syntax error",
            Self::TypeMismatch => "type mismatch",
            Self::UnboundVariable => "unbound variable",
            Self::IndexOutOfRange => "index out of range",
            Self::ArityOrShape => "arity or shape error",
            Self::NotAFunction => "not a function",
            Self::Arithmetic => "arithmetic error",
            Self::InvalidArgument => "invalid argument",
        };
        write!(f, "{name}")
    }
}

/// Any failure of the lex, parse and evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source text could not be tokenized or parsed.
    Parse(ParseError),
    /// The program parsed but failed while evaluating.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the category of the wrapped error.
    ///
    /// ## Example
    /// ```
    /// use lamb::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("if 1 then 2 else 3").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
