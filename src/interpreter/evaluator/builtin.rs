use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{char_to_i64, i64_to_char},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its single evaluated argument and the line number of
/// the application, and returns the result.
type BuiltinFn = fn(&Value, usize) -> EvalResult<Value>;

/// The native functions bound in the initial environment.
///
/// Builtins are ordinary one-argument function values: they are applied,
/// passed to `ListMap` and bound with `let` exactly like closures.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `firstChar s`: the first character of `s`, or `""` for `""`.
    FirstChar,
    /// `remainingChars s`: `s` without its first character.
    RemainingChars,
    /// `charCode s`: the code point of the first character of `s`.
    CharCode,
    /// `codeChar n`: the one-character string with code point `n`.
    CodeChar,
}

/// Names of all builtins, as bound in the initial environment.
pub const BUILTIN_FUNCTIONS: &[&str] = &["firstChar", "remainingChars", "charCode", "codeChar"];

impl Builtin {
    /// Every builtin, in registry order.
    pub const ALL: [Self; 4] = [Self::FirstChar, Self::RemainingChars, Self::CharCode, Self::CodeChar];

    /// The name the builtin is bound to.
    #[must_use]
    pub const fn name(self) -> &'static str {
        BUILTIN_FUNCTIONS[self as usize]
    }

    /// Looks a builtin up by name.
    ///
    /// ## Example
    /// ```
    /// use lamb::interpreter::evaluator::builtin::Builtin;
    ///
    /// assert_eq!(Builtin::from_name("charCode"), Some(Builtin::CharCode));
    /// assert_eq!(Builtin::from_name("charcode"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    const fn function(self) -> BuiltinFn {
        match self {
            Self::FirstChar => first_char,
            Self::RemainingChars => remaining_chars,
            Self::CharCode => char_code,
            Self::CodeChar => code_char,
        }
    }

    /// Applies the builtin to an argument.
    ///
    /// # Errors
    /// - `TypeMismatch` if the argument has the wrong kind.
    /// - `InvalidArgument` for `charCode ""` and for codes that are not
    ///   Unicode scalar values.
    ///
    /// # Example
    /// ```
    /// use lamb::interpreter::{evaluator::builtin::Builtin, value::core::Value};
    ///
    /// let code = Builtin::CharCode.apply(&Value::from("A"), 1).unwrap();
    /// assert_eq!(code, Value::Int(65));
    /// ```
    pub fn apply(self, argument: &Value, line: usize) -> EvalResult<Value> {
        (self.function())(argument, line)
    }
}

fn first_char(argument: &Value, line: usize) -> EvalResult<Value> {
    let s = argument.as_str("firstChar", line)?;
    Ok(Value::String(s.chars().take(1).collect()))
}

fn remaining_chars(argument: &Value, line: usize) -> EvalResult<Value> {
    let s = argument.as_str("remainingChars", line)?;
    Ok(Value::String(s.chars().skip(1).collect()))
}

fn char_code(argument: &Value, line: usize) -> EvalResult<Value> {
    let s = argument.as_str("charCode", line)?;
    let first = s.chars()
                 .next()
                 .ok_or_else(|| RuntimeError::InvalidArgument { builtin: "charCode",
                                                                details: "the string is empty".to_string(),
                                                                line })?;
    Ok(Value::Int(char_to_i64(first)))
}

fn code_char(argument: &Value, line: usize) -> EvalResult<Value> {
    let code = argument.as_int("codeChar", line)?;
    let c = i64_to_char(code).ok_or_else(|| RuntimeError::InvalidArgument { builtin: "codeChar",
                                                                             details: format!("{code} is not a character code"),
                                                                             line })?;
    Ok(Value::String(c.to_string()))
}
