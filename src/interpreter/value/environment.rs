use crate::interpreter::{evaluator::builtin::Builtin, value::core::Value};

/// A persistent mapping from variable names to values.
///
/// Backed by an `im` hash array mapped trie: [`Environment::extend`] returns a
/// new environment that shares all untouched structure with the old one, and
/// never changes what existing holders (for example closures) can see.
///
/// ## Example
/// ```
/// use lamb::interpreter::value::{core::Value, environment::Environment};
///
/// let outer = Environment::new().extend("x", Value::Int(1));
/// let inner = outer.extend("x", Value::Int(2));
///
/// assert_eq!(outer.lookup("x"), Some(Value::Int(1)));
/// assert_eq!(inner.lookup("x"), Some(Value::Int(2)));
/// ```
#[derive(Clone, Default)]
pub struct Environment {
    bindings: im::HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the environment programs start in: every builtin bound under
    /// its name.
    #[must_use]
    pub fn initial() -> Self {
        Builtin::ALL.iter()
                    .fold(Self::new(), |env, builtin| env.extend(builtin.name(), Value::Builtin(*builtin)))
    }

    /// Returns a new environment with `name` bound to `value`, shadowing any
    /// previous binding of `name`.
    #[must_use]
    pub fn extend(&self, name: impl Into<String>, value: Value) -> Self {
        Self { bindings: self.bindings.update(name.into(), value) }
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the environment has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl std::fmt::Debug for Environment {
    // Only names: values may be closures that capture this environment.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.bindings.keys().collect();
        names.sort();
        f.debug_set().entries(names).finish()
    }
}
