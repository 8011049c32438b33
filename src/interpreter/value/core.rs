use std::{
    cell::{Ref, RefCell, RefMut},
    rc::Rc,
};

use crate::{
    ast::{Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin::Builtin, core::EvalResult},
        value::environment::Environment,
    },
};

/// The runtime kind of a value.
///
/// Lists record the kind of their elements as their content type, and every
/// element must match it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `Value::Int`
    Int,
    /// `Value::Bool`
    Bool,
    /// `Value::String`
    String,
    /// `Value::List`
    List,
    /// Closures and builtins.
    Function,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int => "Int",
            Self::Bool => "Bool",
            Self::String => "String",
            Self::List => "List",
            Self::Function => "Function",
        };
        write!(f, "{name}")
    }
}

/// Represents a runtime value in the interpreter.
///
/// Lists are reference values: cloning a `Value::List` shares the underlying
/// storage, so the in-place list operations are visible through every clone.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by `==` and `ListIsEmpty`, consumed by `if` and `ListFilter`.
    Bool(bool),
    /// A string.
    String(String),
    /// A mutable, homogeneous list.
    List(Rc<ListValue>),
    /// A user-defined function together with its captured environment.
    Closure(Rc<Closure>),
    /// A native function from the builtin registry.
    Builtin(Builtin),
}

impl Value {
    /// Creates a list value from its content type and elements.
    ///
    /// The caller is responsible for `items` matching `content_type`.
    ///
    /// ## Example
    /// ```
    /// use lamb::interpreter::value::core::{Value, ValueKind};
    ///
    /// let list = Value::list(ValueKind::Int, vec![Value::Int(1), Value::Int(2)]);
    /// assert_eq!(list.to_string(), "List[1, 2]");
    /// ```
    #[must_use]
    pub fn list(content_type: ValueKind, items: Vec<Self>) -> Self {
        Self::List(Rc::new(ListValue::new(content_type, items)))
    }

    /// Returns the runtime kind of the value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Bool(_) => ValueKind::Bool,
            Self::String(_) => ValueKind::String,
            Self::List(_) => ValueKind::List,
            Self::Closure(_) | Self::Builtin(_) => ValueKind::Function,
        }
    }

    /// Converts the value to `i64`, or returns an error if not an integer.
    ///
    /// # Parameters
    /// - `context`: What needed the integer, for the error message.
    /// - `line`: Source code line number for error reporting.
    pub fn as_int(&self, context: &str, line: usize) -> EvalResult<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            _ => Err(self.mismatch(context, "Int", line)),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for `if` conditions and filter predicates.
    pub fn as_bool(&self, context: &str, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(context, "Bool", line)),
        }
    }

    /// Borrows the string, or returns an error if the value is not a string.
    pub fn as_str(&self, context: &str, line: usize) -> EvalResult<&str> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(self.mismatch(context, "String", line)),
        }
    }

    /// Returns a shared handle to the list, or an error if the value is not
    /// a list.
    pub fn as_list(&self, context: &str, line: usize) -> EvalResult<Rc<ListValue>> {
        match self {
            Self::List(list) => Ok(Rc::clone(list)),
            _ => Err(self.mismatch(context, "List", line)),
        }
    }

    /// Returns an error unless the value can be applied to an argument.
    pub fn expect_function(&self, context: &str, line: usize) -> EvalResult<()> {
        match self {
            Self::Closure(_) | Self::Builtin(_) => Ok(()),
            _ => Err(self.mismatch(context, "a function", line)),
        }
    }

    fn mismatch(&self, context: &str, expected: &str, line: usize) -> RuntimeError {
        RuntimeError::TypeMismatch { context: context.to_string(),
                                     expected: expected.to_string(),
                                     found: self.kind(),
                                     line }
    }
}

impl PartialEq for Value {
    /// Scalars compare by value and lists by content type and elements.
    /// Functions are only equal to themselves.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                Rc::ptr_eq(a, b)
                || (a.content_type == b.content_type && *a.items() == *b.items())
            },
            (Self::Closure(a), Self::Closure(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => (*n).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::String(s) => s.as_str().into(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::List(list) => {
                write!(f, "List[")?;

                for (index, value) in list.items().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Closure(closure) => write!(f, "<closure \\{}>", closure.param),
            Self::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name()),
        }
    }
}

/// The storage behind a `Value::List`.
///
/// The content type is fixed when the list is created; the elements live in a
/// `RefCell` so that operations like `ListAppend` can mutate them in place.
#[derive(Debug)]
pub struct ListValue {
    content_type: ValueKind,
    items:        RefCell<Vec<Value>>,
}

impl ListValue {
    /// Creates list storage from its content type and elements.
    #[must_use]
    pub const fn new(content_type: ValueKind, items: Vec<Value>) -> Self {
        Self { content_type,
               items: RefCell::new(items) }
    }

    /// The kind every element of the list has.
    #[must_use]
    pub const fn content_type(&self) -> ValueKind {
        self.content_type
    }

    /// Borrows the elements.
    pub fn items(&self) -> Ref<'_, Vec<Value>> {
        self.items.borrow()
    }

    /// Mutably borrows the elements.
    ///
    /// The borrow must not be held while user code runs, since that code may
    /// read the same list.
    pub(crate) fn items_mut(&self) -> RefMut<'_, Vec<Value>> {
        self.items.borrow_mut()
    }

    /// Copies the current elements out of the list.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Value> {
        self.items.borrow().clone()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

/// A function value: a binder, a body and the environment the lambda was
/// evaluated in.
///
/// The captured environment is fixed at creation with one exception:
/// `let rec` rebinds it once, through [`Closure::bind_self`], so the function
/// can see its own name.
pub struct Closure {
    /// The parameter name.
    pub param: String,
    /// The body expression.
    pub body:  Rc<Expr>,
    env:       RefCell<Environment>,
}

impl Closure {
    /// Creates a closure over `env`.
    #[must_use]
    pub const fn new(env: Environment, param: String, body: Rc<Expr>) -> Self {
        Self { param,
               body,
               env: RefCell::new(env) }
    }

    /// Returns the captured environment.
    ///
    /// Environments are persistent, so the returned copy shares its
    /// structure with the closure's own.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.env.borrow().clone()
    }

    /// Extends the captured environment in place with `name` bound to
    /// `value`.
    ///
    /// Only recursive `let` calls this, with the closure itself as `value`.
    /// That makes the closure reachable from its own environment, a reference
    /// cycle that is never freed.
    pub(crate) fn bind_self(&self, name: &str, value: Value) {
        let extended = self.env.borrow().extend(name, value);
        *self.env.borrow_mut() = extended;
    }
}

impl std::fmt::Debug for Closure {
    // The environment is left out: after `let rec` it contains the closure.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Closure")
         .field("param", &self.param)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}
