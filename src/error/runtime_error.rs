use crate::{
    ast::{BinaryOperator, ExprTag, ListOperation},
    error::ErrorKind,
    interpreter::value::core::ValueKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a variable that is not bound in any enclosing scope.
    UnboundVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had the wrong kind for the place it was used in.
    TypeMismatch {
        /// What was being evaluated (an operation, builtin or construct).
        context:  String,
        /// Description of the accepted kind(s).
        expected: String,
        /// The kind actually found.
        found:    ValueKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binary operator received operands it is not defined for.
    IncompatibleOperands {
        /// The operator.
        op:    BinaryOperator,
        /// Kind of the left operand.
        left:  ValueKind,
        /// Kind of the right operand.
        right: ValueKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A list operation would have mixed element kinds in one list.
    ElementTypeMismatch {
        /// The list operation.
        operation: ListOperation,
        /// The content type of the list.
        expected:  ValueKind,
        /// The kind of the offending element.
        found:     ValueKind,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A list literal contained an element that is not a data literal.
    UnsupportedListElement {
        /// The kind of the offending element node.
        found: ExprTag,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The target of an application was not a function.
    NotAFunction {
        /// The kind of the value in function position.
        found: ValueKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A list index was outside the valid range.
    IndexOutOfRange {
        /// The list operation.
        operation: ListOperation,
        /// The index that was requested.
        index:     i64,
        /// The size of the list at that moment.
        size:      usize,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A function or list operation node had the wrong shape.
    ArityOrShape {
        /// Details about what was wrong.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer overflow while computing an arithmetic result.
    Overflow {
        /// The operator that overflowed.
        op:   BinaryOperator,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A builtin received a value outside its domain.
    InvalidArgument {
        /// The builtin's name.
        builtin: &'static str,
        /// Details about the rejected argument.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Returns the category of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnboundVariable { .. } => ErrorKind::UnboundVariable,
            Self::TypeMismatch { .. }
            | Self::IncompatibleOperands { .. }
            | Self::ElementTypeMismatch { .. }
            | Self::UnsupportedListElement { .. } => ErrorKind::TypeMismatch,
            Self::NotAFunction { .. } => ErrorKind::NotAFunction,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::ArityOrShape { .. } => ErrorKind::ArityOrShape,
            Self::DivisionByZero { .. } | Self::Overflow { .. } => ErrorKind::Arithmetic,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name, line } => {
                write!(f, "Error on line {line}: Unbound variable '{name}'.")
            },
            Self::TypeMismatch { context,
                                 expected,
                                 found,
                                 line, } => write!(f,
                                                   "Error on line {line}: Type mismatch in {context}: expected {expected} but found {found}."),
            Self::IncompatibleOperands { op, left, right, line } => write!(f,
                                                                           "Error on line {line}: Cannot use {op} on {left} and {right}."),
            Self::ElementTypeMismatch { operation,
                                        expected,
                                        found,
                                        line, } => write!(f,
                                                          "Error on line {line}: {operation} cannot put a {found} into a list of {expected}."),
            Self::UnsupportedListElement { found, line } => write!(f,
                                                                   "Error on line {line}: Unsupported data type in list literal: {found}."),
            Self::NotAFunction { found, line } => {
                write!(f, "Error on line {line}: A value of type {found} is not a function.")
            },
            Self::IndexOutOfRange { operation,
                                    index,
                                    size,
                                    line, } => write!(f,
                                                      "Error on line {line}: {operation} index {index} is out of range for a list of size {size}."),
            Self::ArityOrShape { details, line } => {
                write!(f, "Error on line {line}: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { op, line } => write!(f,
                                                  "Error on line {line}: Integer overflow while computing {op}."),
            Self::InvalidArgument { builtin,
                                    details,
                                    line, } => {
                write!(f, "Error on line {line}: Invalid argument to {builtin}: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
