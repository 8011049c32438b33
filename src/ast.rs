use std::rc::Rc;

use crate::interpreter::value::core::ValueKind;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code: integers, booleans and strings. List literals are separate
/// [`Expr::ListLiteral`] nodes because their elements are expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A string literal, taken verbatim from between the quotes.
    String(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// A type annotation on a lambda binder, e.g. `\f : Int -> Int => ...`.
///
/// Annotations are parsed and stored with the lambda but are never consulted
/// during evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// `Int`
    Int,
    /// `Bool`
    Bool,
    /// `String`
    String,
    /// `argument -> result`
    Function(Box<Self>, Box<Self>),
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => write!(f, "Int"),
            Self::Bool => write!(f, "Bool"),
            Self::String => write!(f, "String"),
            Self::Function(argument, result) => match argument.as_ref() {
                Self::Function(..) => write!(f, "({argument}) -> {result}"),
                _ => write!(f, "{argument} -> {result}"),
            },
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every construct of the language is an expression; there are no statements.
/// Each variant carries the source line it started on so that runtime errors
/// can point back at the program text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (integer, boolean or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A single-parameter function, `\param => body`.
    Lambda {
        /// The binder name.
        param:      String,
        /// Optional declared type of the binder.
        param_type: Option<Type>,
        /// The body, shared with every closure created from this lambda.
        body:       Rc<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// Function application by juxtaposition, `function argument`.
    Application {
        /// The expression in function position.
        function: Box<Self>,
        /// The argument expression.
        argument: Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Conditional `if c then a else b` expression.
    IfExpr {
        /// The condition; must evaluate to a boolean.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Box<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A binary operation (addition, equality, concatenation, ...).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `let [rec] name = value in body`.
    Let {
        /// Whether the binding may refer to itself.
        recursive: bool,
        /// The binder name.
        name:      String,
        /// The bound expression.
        value:     Box<Self>,
        /// The expression evaluated with the binding in scope.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// List literal `List[e1, e2, ...]`.
    ListLiteral {
        /// Node kind shared by every element, taken from the first one.
        element_tag: ExprTag,
        /// Elements of the list, in order.
        elements:    Vec<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A list operation taking one operand (`ListGetSize`, `ListIsEmpty`).
    UnaryListOp {
        /// The operation to perform.
        op:    ListOperation,
        /// The list operand.
        first: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A list operation taking two operands.
    BinaryListOp {
        /// The operation to perform.
        op:     ListOperation,
        /// The list operand.
        first:  Box<Self>,
        /// Second operand (list, element, index or function).
        second: Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A list operation taking three operands (`ListInsertAt`).
    TernaryListOp {
        /// The operation to perform.
        op:     ListOperation,
        /// The list operand.
        first:  Box<Self>,
        /// Second operand.
        second: Box<Self>,
        /// Third operand.
        third:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use lamb::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Lambda { line, .. }
            | Self::Application { line, .. }
            | Self::IfExpr { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Let { line, .. }
            | Self::ListLiteral { line, .. }
            | Self::UnaryListOp { line, .. }
            | Self::BinaryListOp { line, .. }
            | Self::TernaryListOp { line, .. } => *line,
        }
    }

    /// Returns the node kind of `self`.
    ///
    /// Literals are distinguished by their payload, so `1` and `true` report
    /// different tags. The three list-operation shapes share one tag.
    ///
    /// ## Example
    /// ```
    /// use lamb::ast::{Expr, ExprTag};
    ///
    /// let expr = Expr::Literal { value: 3.into(),
    ///                            line:  1, };
    ///
    /// assert_eq!(expr.tag(), ExprTag::Integer);
    /// ```
    #[must_use]
    pub const fn tag(&self) -> ExprTag {
        match self {
            Self::Literal { value: LiteralValue::Integer(_),
                            .. } => ExprTag::Integer,
            Self::Literal { value: LiteralValue::Bool(_),
                            .. } => ExprTag::Bool,
            Self::Literal { value: LiteralValue::String(_),
                            .. } => ExprTag::String,
            Self::Variable { .. } => ExprTag::Variable,
            Self::Lambda { .. } => ExprTag::Lambda,
            Self::Application { .. } => ExprTag::Application,
            Self::IfExpr { .. } => ExprTag::If,
            Self::BinaryOp { .. } => ExprTag::BinaryOp,
            Self::Let { .. } => ExprTag::Let,
            Self::ListLiteral { .. } => ExprTag::List,
            Self::UnaryListOp { .. } | Self::BinaryListOp { .. } | Self::TernaryListOp { .. } => {
                ExprTag::ListOperation
            },
        }
    }
}

/// The closed set of expression node kinds.
///
/// Used by the parser to keep list literals homogeneous and by the evaluator
/// to report unsupported list elements.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ExprTag {
    /// Integer literal.
    Integer,
    /// Boolean literal.
    Bool,
    /// String literal.
    String,
    /// List literal.
    List,
    /// Variable reference.
    Variable,
    /// Lambda abstraction.
    Lambda,
    /// Function application.
    Application,
    /// Conditional expression.
    If,
    /// Binary operation.
    BinaryOp,
    /// Let binding.
    Let,
    /// Any list operation.
    ListOperation,
}

impl ExprTag {
    /// Maps a literal node kind onto the runtime kind it evaluates to.
    ///
    /// Returns `None` for node kinds that are not data literals; such nodes
    /// cannot appear as elements of an evaluated list literal.
    #[must_use]
    pub const fn value_kind(self) -> Option<ValueKind> {
        match self {
            Self::Integer => Some(ValueKind::Int),
            Self::Bool => Some(ValueKind::Bool),
            Self::String => Some(ValueKind::String),
            Self::List => Some(ValueKind::List),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExprTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "integer literal",
            Self::Bool => "boolean literal",
            Self::String => "string literal",
            Self::List => "list literal",
            Self::Variable => "variable",
            Self::Lambda => "lambda",
            Self::Application => "application",
            Self::If => "if expression",
            Self::BinaryOp => "binary operation",
            Self::Let => "let expression",
            Self::ListOperation => "list operation",
        };
        write!(f, "{name}")
    }
}

/// Represents a binary operator.
///
/// Binary operators include integer arithmetic, equality and string
/// concatenation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Equality (`==`)
    Equality,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// String concatenation (`#`)
    Concat,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
}

impl BinaryOperator {
    /// Returns the `(left, right)` binding powers used by precedence climbing.
    ///
    /// Equality is `(2, 1)`: its right power is lower than its left one, so
    /// chains such as `a == b == c` group to the right as `a == (b == c)`.
    /// The arithmetic operators use `(n, n + 1)` and group to the left.
    ///
    /// ## Example
    /// ```
    /// use lamb::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Equality.binding_power(), (2, 1));
    /// assert_eq!(BinaryOperator::Mul.binding_power(), (5, 6));
    /// ```
    #[must_use]
    pub const fn binding_power(self) -> (u8, u8) {
        match self {
            Self::Equality => (2, 1),
            Self::Add | Self::Sub | Self::Concat => (3, 4),
            Self::Mul | Self::Div | Self::Mod => (5, 6),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equality => "==",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Concat => "#",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}

/// One of the ten built-in list operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ListOperation {
    /// `ListGetSize list`
    GetSize,
    /// `ListIsEmpty list`
    IsEmpty,
    /// `ListJoin list other`
    Join,
    /// `ListAppend list element`
    Append,
    /// `ListRemoveAtPosition list index`
    RemoveAtPosition,
    /// `ListGetValue list index`
    GetValue,
    /// `ListInsertAt list element index`
    InsertAt,
    /// `ListMap list function`
    Map,
    /// `ListFilter list predicate`
    Filter,
    /// `ListFold list function`
    Fold,
}

impl ListOperation {
    /// Every list operation, in declaration order.
    pub const ALL: [Self; 10] = [Self::GetSize,
                                 Self::IsEmpty,
                                 Self::Join,
                                 Self::Append,
                                 Self::RemoveAtPosition,
                                 Self::GetValue,
                                 Self::InsertAt,
                                 Self::Map,
                                 Self::Filter,
                                 Self::Fold];

    /// Number of operands the operation takes.
    ///
    /// ## Example
    /// ```
    /// use lamb::ast::ListOperation;
    ///
    /// assert_eq!(ListOperation::IsEmpty.arity(), 1);
    /// assert_eq!(ListOperation::Fold.arity(), 2);
    /// assert_eq!(ListOperation::InsertAt.arity(), 3);
    /// ```
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::GetSize | Self::IsEmpty => 1,
            Self::Join
            | Self::Append
            | Self::RemoveAtPosition
            | Self::GetValue
            | Self::Map
            | Self::Filter
            | Self::Fold => 2,
            Self::InsertAt => 3,
        }
    }

    /// The source keyword for the operation.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::GetSize => "ListGetSize",
            Self::IsEmpty => "ListIsEmpty",
            Self::Join => "ListJoin",
            Self::Append => "ListAppend",
            Self::RemoveAtPosition => "ListRemoveAtPosition",
            Self::GetValue => "ListGetValue",
            Self::InsertAt => "ListInsertAt",
            Self::Map => "ListMap",
            Self::Filter => "ListFilter",
            Self::Fold => "ListFold",
        }
    }
}

impl std::fmt::Display for ListOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
