use std::rc::Rc;

use crate::{
    ast::{Expr, ListOperation},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, apply, eval},
        value::{
            core::{ListValue, Value},
            environment::Environment,
        },
    },
    util::num::{i64_to_index, usize_to_i64},
};

/// Evaluates a one-operand list operation (`ListGetSize`, `ListIsEmpty`).
///
/// # Errors
/// `ArityOrShape` if `op` does not take one operand, `TypeMismatch` if the
/// operand is not a list.
///
/// # Example
/// ```
/// use lamb::{
///     ast::{Expr, ListOperation},
///     interpreter::{
///         evaluator::list::eval_unary_list_op,
///         value::{
///             core::{Value, ValueKind},
///             environment::Environment,
///         },
///     },
/// };
///
/// let env = Environment::new().extend("xs", Value::list(ValueKind::Int, vec![Value::Int(1)]));
/// let xs = Expr::Variable { name: "xs".to_string(),
///                           line: 1, };
///
/// let size = eval_unary_list_op(&env, ListOperation::GetSize, &xs, 1).unwrap();
/// assert_eq!(size, Value::Int(1));
/// ```
pub fn eval_unary_list_op(env: &Environment, op: ListOperation, first: &Expr, line: usize) -> EvalResult<Value> {
    check_arity(op, 1, line)?;
    let list = eval(env, first)?.as_list(op.keyword(), line)?;

    match op {
        ListOperation::GetSize => Ok(Value::Int(usize_to_i64(list.len()))),
        ListOperation::IsEmpty => Ok(Value::Bool(list.is_empty())),
        _ => Err(wrong_arity(op, 1, line)),
    }
}

/// Evaluates a two-operand list operation.
///
/// Both operands are evaluated, left to right, before the operation runs.
/// `ListJoin`, `ListAppend`, `ListRemoveAtPosition` and `ListFilter` change
/// the first operand's list in place and return that same list.
///
/// # Errors
/// `ArityOrShape` if `op` does not take two operands; otherwise the errors
/// of the individual operation.
pub fn eval_binary_list_op(env: &Environment,
                           op: ListOperation,
                           first: &Expr,
                           second: &Expr,
                           line: usize)
                           -> EvalResult<Value> {
    check_arity(op, 2, line)?;
    let list = eval(env, first)?.as_list(op.keyword(), line)?;
    let second = eval(env, second)?;

    match op {
        ListOperation::Join => join(list, &second, line),
        ListOperation::Append => append(list, second, line),
        ListOperation::RemoveAtPosition => remove_at(list, &second, line),
        ListOperation::GetValue => get_value(&list, &second, line),
        ListOperation::Map => map(&list, &second, line),
        ListOperation::Filter => filter(list, &second, line),
        ListOperation::Fold => fold(&list, &second, line),
        _ => Err(wrong_arity(op, 2, line)),
    }
}

/// Evaluates a three-operand list operation (`ListInsertAt`).
///
/// `ListInsertAt list element index` inserts `element` before position
/// `index`; an index equal to the size appends.
///
/// # Errors
/// - `ArityOrShape` if `op` does not take three operands.
/// - `TypeMismatch` for a non-list first operand, a non-integer index or an
///   element of the wrong kind.
/// - `IndexOutOfRange` if `index` is negative or greater than the size.
pub fn eval_ternary_list_op(env: &Environment,
                            op: ListOperation,
                            first: &Expr,
                            second: &Expr,
                            third: &Expr,
                            line: usize)
                            -> EvalResult<Value> {
    check_arity(op, 3, line)?;
    let list = eval(env, first)?.as_list(op.keyword(), line)?;
    let element = eval(env, second)?;
    let index = eval(env, third)?.as_int(op.keyword(), line)?;

    match op {
        ListOperation::InsertAt => insert_at(list, element, index, line),
        _ => Err(wrong_arity(op, 3, line)),
    }
}

fn check_arity(op: ListOperation, given: usize, line: usize) -> EvalResult<()> {
    if op.arity() == given {
        Ok(())
    } else {
        Err(wrong_arity(op, given, line))
    }
}

fn wrong_arity(op: ListOperation, given: usize, line: usize) -> RuntimeError {
    RuntimeError::ArityOrShape { details: format!("{op} takes {} operand(s) but was given {given}",
                                                  op.arity()),
                                 line }
}

fn join(list: Rc<ListValue>, other: &Value, line: usize) -> EvalResult<Value> {
    let other = other.as_list(ListOperation::Join.keyword(), line)?;

    if other.content_type() != list.content_type() {
        return Err(RuntimeError::ElementTypeMismatch { operation: ListOperation::Join,
                                                       expected:  list.content_type(),
                                                       found:     other.content_type(),
                                                       line });
    }

    // `other` may be `list` itself.
    let items = other.snapshot().into_iter().map(|item| detach(item, &list)).collect::<Vec<_>>();
    list.items_mut().extend(items);

    Ok(Value::List(list))
}

fn append(list: Rc<ListValue>, element: Value, line: usize) -> EvalResult<Value> {
    check_element(&list, ListOperation::Append, &element, line)?;

    let element = detach(element, &list);
    list.items_mut().push(element);

    Ok(Value::List(list))
}

fn remove_at(list: Rc<ListValue>, index: &Value, line: usize) -> EvalResult<Value> {
    let position = checked_index(&list, ListOperation::RemoveAtPosition, index, line)?;
    list.items_mut().remove(position);

    Ok(Value::List(list))
}

fn get_value(list: &ListValue, index: &Value, line: usize) -> EvalResult<Value> {
    let position = checked_index(list, ListOperation::GetValue, index, line)?;
    Ok(list.items()[position].clone())
}

fn insert_at(list: Rc<ListValue>, element: Value, index: i64, line: usize) -> EvalResult<Value> {
    check_element(&list, ListOperation::InsertAt, &element, line)?;

    let size = list.len();
    let position =
        i64_to_index(index, size + 1).ok_or_else(|| out_of_range(ListOperation::InsertAt, index, size, line))?;

    let element = detach(element, &list);
    list.items_mut().insert(position, element);

    Ok(Value::List(list))
}

/// `ListMap list f`: a new list holding `f` applied to every element.
///
/// The new list's content type is the kind of the first result; an empty
/// input gives an empty list with the input's content type.
fn map(list: &ListValue, function: &Value, line: usize) -> EvalResult<Value> {
    function.expect_function(ListOperation::Map.keyword(), line)?;

    let mut results: Vec<Value> = Vec::with_capacity(list.len());
    for item in list.snapshot() {
        let result = apply(function, item, line)?;

        if let Some(first) = results.first().map(Value::kind)
           && first != result.kind()
        {
            return Err(RuntimeError::ElementTypeMismatch { operation: ListOperation::Map,
                                                           expected:  first,
                                                           found:     result.kind(),
                                                           line });
        }

        results.push(result);
    }

    let content_type = results.first().map_or(list.content_type(), Value::kind);
    Ok(Value::list(content_type, results))
}

/// `ListFilter list p`: keeps the elements for which `p` returns `true`.
fn filter(list: Rc<ListValue>, predicate: &Value, line: usize) -> EvalResult<Value> {
    predicate.expect_function(ListOperation::Filter.keyword(), line)?;

    let mut kept = Vec::new();
    for item in list.snapshot() {
        if apply(predicate, item.clone(), line)?.as_bool("ListFilter predicate", line)? {
            kept.push(item);
        }
    }

    *list.items_mut() = kept;
    Ok(Value::List(list))
}

/// `ListFold list f`: left fold seeded with the first element.
///
/// `f` must be a curried two-argument closure, `\acc => \x => ...`.
fn fold(list: &ListValue, function: &Value, line: usize) -> EvalResult<Value> {
    function.expect_function(ListOperation::Fold.keyword(), line)?;

    let is_curried = matches!(function, Value::Closure(closure) if matches!(*closure.body, Expr::Lambda { .. }));
    if !is_curried {
        return Err(RuntimeError::ArityOrShape { details: "ListFold needs a function of the form \\acc => \\x => ..."
                                                         .to_string(),
                                                line });
    }

    let items = list.snapshot();
    let Some((seed, rest)) = items.split_first()
                                  .filter(|(_, rest)| !rest.is_empty())
    else {
        return Err(RuntimeError::ArityOrShape { details: format!("ListFold needs at least 2 elements but the list has {}",
                                                                 items.len()),
                                                line });
    };

    rest.iter().try_fold(seed.clone(), |acc, item| {
                   let partial = apply(function, acc, line)?;
                   apply(&partial, item.clone(), line)
               })
}

fn check_element(list: &ListValue, operation: ListOperation, element: &Value, line: usize) -> EvalResult<()> {
    if element.kind() == list.content_type() {
        Ok(())
    } else {
        Err(RuntimeError::ElementTypeMismatch { operation,
                                                expected: list.content_type(),
                                                found: element.kind(),
                                                line })
    }
}

fn checked_index(list: &ListValue, operation: ListOperation, index: &Value, line: usize) -> EvalResult<usize> {
    let index = index.as_int(operation.keyword(), line)?;
    i64_to_index(index, list.len()).ok_or_else(|| out_of_range(operation, index, list.len(), line))
}

const fn out_of_range(operation: ListOperation, index: i64, size: usize, line: usize) -> RuntimeError {
    RuntimeError::IndexOutOfRange { operation,
                                    index,
                                    size,
                                    line }
}

/// Prepares `element` for storage inside `target`.
///
/// A list that is, or contains, `target` is replaced by a deep copy so that
/// no list ever ends up inside itself.
fn detach(element: Value, target: &Rc<ListValue>) -> Value {
    match &element {
        Value::List(list) if reaches(list, target) => deep_copy(list),
        _ => element,
    }
}

fn reaches(list: &Rc<ListValue>, target: &Rc<ListValue>) -> bool {
    Rc::ptr_eq(list, target)
    || list.items().iter().any(|item| matches!(item, Value::List(inner) if reaches(inner, target)))
}

fn deep_copy(list: &ListValue) -> Value {
    let items = list.items()
                    .iter()
                    .map(|item| match item {
                        Value::List(inner) => deep_copy(inner),
                        other => other.clone(),
                    })
                    .collect();

    Value::list(list.content_type(), items)
}
