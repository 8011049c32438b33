use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a binary operation between two values.
///
/// `==` compares integers, booleans or strings of the same kind; `#`
/// concatenates two strings; every other operator takes two integers and
/// produces an integer.
///
/// Arithmetic is checked: a result that does not fit in 64 bits is an
/// `Overflow` error rather than wrapping. Division truncates toward zero and
/// modulo is Euclidean, so `-7 % 3` is `2`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// - `IncompatibleOperands` if the operand kinds do not suit the operator.
/// - `DivisionByZero` for `/` or `%` with a zero divisor.
/// - `Overflow` if the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use lamb::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::core::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Mod, &Value::Int(-7), &Value::Int(3), 1);
/// assert_eq!(result.unwrap(), Value::Int(2));
///
/// let result = eval_binary(BinaryOperator::Concat, &Value::from("ab"), &Value::from("c"), 1);
/// assert_eq!(result.unwrap(), Value::from("abc"));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Concat, Div, Equality, Mod, Mul, Sub};

    match (op, left, right) {
        (Equality, Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a == b)),
        (Equality, Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(a == b)),
        (Equality, Value::String(a), Value::String(b)) => Ok(Value::Bool(a == b)),
        (Concat, Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
        (Add | Sub | Mul | Div | Mod, Value::Int(a), Value::Int(b)) => {
            eval_integer_op(op, *a, *b, line).map(Value::Int)
        },
        _ => Err(RuntimeError::IncompatibleOperands { op,
                                                      left: left.kind(),
                                                      right: right.kind(),
                                                      line }),
    }
}

fn eval_integer_op(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    if matches!(op, Div | Mod) && right == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => left.checked_div(right),
        Mod => left.checked_rem_euclid(right),
        _ => None,
    };

    result.ok_or(RuntimeError::Overflow { op, line })
}
