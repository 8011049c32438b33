use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::eval_binary,
            list::{eval_binary_list_op, eval_ternary_list_op, eval_unary_list_op},
        },
        value::{
            core::{Closure, Value},
            environment::Environment,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression in an environment and returns the resulting value.
///
/// This is the main entry point for evaluation. The evaluator dispatches on
/// the expression variant; every failure aborts the whole evaluation.
///
/// Evaluation is strict: arguments are evaluated before a function body
/// runs, and the body runs in the function's captured environment extended
/// with its parameter (lexical scoping).
///
/// # Parameters
/// - `env`: The bindings visible to `expr`.
/// - `expr`: Expression to evaluate.
///
/// # Example
/// ```
/// use lamb::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{
///         evaluator::core::eval,
///         value::{core::Value, environment::Environment},
///     },
/// };
///
/// let expr = Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "x".to_string(),
///                                                               line: 1, }),
///                             op:    BinaryOperator::Mul,
///                             right: Box::new(Expr::Literal { value: 6.into(),
///                                                             line:  1, }),
///                             line:  1, };
/// let env = Environment::new().extend("x", Value::Int(7));
///
/// assert_eq!(eval(&env, &expr).unwrap(), Value::Int(42));
/// ```
pub fn eval(env: &Environment, expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(value.into()),
        Expr::Variable { name, line } => eval_variable(env, name, *line),
        Expr::Lambda { param, body, .. } => Ok(eval_lambda(env, param, body)),
        Expr::Application { function,
                            argument,
                            line, } => {
            let function = eval(env, function)?;
            match function {
                Value::Closure(_) | Value::Builtin(_) => {
                    let argument = eval(env, argument)?;
                    apply(&function, argument, *line)
                },
                other => Err(RuntimeError::NotAFunction { found: other.kind(),
                                                          line:  *line, }),
            }
        },
        Expr::IfExpr { condition,
                       then_branch,
                       else_branch,
                       line, } => {
            if eval(env, condition)?.as_bool("if condition", *line)? {
                eval(env, then_branch)
            } else {
                eval(env, else_branch)
            }
        },
        Expr::BinaryOp { left,
                         op,
                         right,
                         line, } => {
            let left = eval(env, left)?;
            let right = eval(env, right)?;
            eval_binary(*op, &left, &right, *line)
        },
        Expr::Let { recursive,
                    name,
                    value,
                    body,
                    .. } => eval_let(env, *recursive, name, value, body),
        Expr::ListLiteral { elements, line, .. } => eval_list_literal(env, elements, *line),
        Expr::UnaryListOp { op, first, line } => eval_unary_list_op(env, *op, first, *line),
        Expr::BinaryListOp { op,
                             first,
                             second,
                             line, } => eval_binary_list_op(env, *op, first, second, *line),
        Expr::TernaryListOp { op,
                              first,
                              second,
                              third,
                              line, } => eval_ternary_list_op(env, *op, first, second, third, *line),
    }
}

/// Applies a function value to an already evaluated argument.
///
/// Closures run their body in their captured environment extended with the
/// parameter; builtins run natively.
///
/// # Errors
/// Returns `NotAFunction` if `function` is not a closure or builtin, and
/// propagates any error raised by the body.
pub fn apply(function: &Value, argument: Value, line: usize) -> EvalResult<Value> {
    match function {
        Value::Closure(closure) => {
            let env = closure.environment().extend(closure.param.as_str(), argument);
            eval(&env, &closure.body)
        },
        Value::Builtin(builtin) => builtin.apply(&argument, line),
        other => Err(RuntimeError::NotAFunction { found: other.kind(),
                                                  line }),
    }
}

fn eval_variable(env: &Environment, name: &str, line: usize) -> EvalResult<Value> {
    env.lookup(name)
       .ok_or_else(|| RuntimeError::UnboundVariable { name: name.to_string(),
                                                      line })
}

/// Creates a closure over the current environment.
///
/// Any declared parameter type is ignored.
fn eval_lambda(env: &Environment, param: &str, body: &Rc<Expr>) -> Value {
    Value::Closure(Rc::new(Closure::new(env.clone(), param.to_string(), Rc::clone(body))))
}

/// Evaluates `let [rec] name = value in body`.
///
/// For a recursive binding whose value is a closure, the closure's own
/// environment is patched to bind `name` to the closure before the body runs.
/// This is the only place a captured environment ever changes.
fn eval_let(env: &Environment,
            recursive: bool,
            name: &str,
            value: &Expr,
            body: &Expr)
            -> EvalResult<Value> {
    let bound = eval(env, value)?;

    if recursive && let Value::Closure(closure) = &bound {
        closure.bind_self(name, bound.clone());
    }

    eval(&env.extend(name, bound), body)
}

/// Evaluates the elements of a list literal in order.
///
/// Only data literals (integers, booleans, strings and nested lists) may
/// appear as elements. The list's content type is the kind of its first
/// element.
///
/// # Errors
/// Returns `UnsupportedListElement` for any other element node, and
/// `ArityOrShape` for a literal with no elements.
fn eval_list_literal(env: &Environment, elements: &[Expr], line: usize) -> EvalResult<Value> {
    let mut items = Vec::with_capacity(elements.len());

    for element in elements {
        let tag = element.tag();
        if tag.value_kind().is_none() {
            return Err(RuntimeError::UnsupportedListElement { found: tag,
                                                              line:  element.line_number(), });
        }
        items.push(eval(env, element)?);
    }

    let content_type =
        items.first()
             .map(Value::kind)
             .ok_or_else(|| RuntimeError::ArityOrShape { details: "A list literal needs at least one element".to_string(),
                                                         line })?;

    Ok(Value::list(content_type, items))
}
