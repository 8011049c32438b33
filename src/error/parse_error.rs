use crate::{
    ast::{ExprTag, ListOperation},
    error::ErrorKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A specific token was required but a different one was found.
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An expression was required but the next token cannot start one.
    ExpectedExpression {
        /// The token encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A type annotation was required but the next token cannot start one.
    ExpectedType {
        /// The token encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A list operation keyword was not followed by enough operands.
    MissingArgument {
        /// The operation missing an operand.
        operation: ListOperation,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// `List[]` has no elements.
    EmptyList {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A list literal with a leading, doubled or trailing comma.
    MalformedList {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A list literal whose elements are not all the same kind of node.
    HeterogeneousList {
        /// The kind of the first element.
        expected: ExprTag,
        /// The kind of the offending element.
        found:    ExprTag,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The input ended inside a string literal.
    UnterminatedString {
        /// The source line where the string started.
        line: usize,
    },
    /// A character that does not start any token.
    UnexpectedCharacter {
        /// The offending text.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An integer literal too large for a 64-bit integer.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after a complete program.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the category of the error.
    ///
    /// Everything is a syntax error except a heterogeneous list literal,
    /// which is a type mismatch detected at parse time.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::HeterogeneousList { .. } => ErrorKind::TypeMismatch,
            _ => ErrorKind::Syntax,
        }
    }

    /// Gets the line number the error was reported on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::ExpectedType { line, .. }
            | Self::MissingArgument { line, .. }
            | Self::EmptyList { line }
            | Self::MalformedList { line }
            | Self::HeterogeneousList { line, .. }
            | Self::UnterminatedString { line }
            | Self::UnexpectedCharacter { line, .. }
            | Self::LiteralTooLarge { line }
            | Self::UnexpectedTrailingTokens { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected} but saw {found}.")
            },

            Self::ExpectedExpression { found, line } => {
                write!(f, "Error on line {line}: Expected an expression but saw {found}.")
            },

            Self::ExpectedType { found, line } => {
                write!(f, "Error on line {line}: Expected a type but saw {found}.")
            },

            Self::MissingArgument { operation, line } => write!(f,
                                                                "Error on line {line}: Missing argument for {operation}, which takes {} operand(s).",
                                                                operation.arity()),

            Self::EmptyList { line } => write!(f,
                                               "Error on line {line}: List literals need at least one element."),

            Self::MalformedList { line } => {
                write!(f, "Error on line {line}: Malformed list literal.")
            },

            Self::HeterogeneousList { expected,
                                      found,
                                      line, } => write!(f,
                                                        "Error on line {line}: Every element of a list has to be the same kind; expected {expected} but found {found}."),

            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },

            Self::UnexpectedCharacter { character, line } => {
                write!(f, "Error on line {line}: Unexpected character '{character}'.")
            },

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression, starting at {token}."),
        }
    }
}

impl std::error::Error for ParseError {}
