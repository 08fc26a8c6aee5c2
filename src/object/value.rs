use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::rc::Rc;

use super::Environment;

/// A built-in function: takes its already-evaluated arguments and
/// returns a [`Value`] (a [`Value::Error`] on misuse).
pub type BuiltinFn = fn(&[Value]) -> Value;

/// The tagged union every expression evaluates to.
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Number(f64),
    String(String),
    Boolean(bool),
    /// Wraps the value of a `return` statement so it can bubble up
    /// through block evaluation without being unwrapped early; only the
    /// function-call boundary and the top-level program fold strip it.
    Return(Box<Value>),
    Error(String),
    /// Produced only by environment lookup to mean "not found"; never
    /// surfaces as the result of evaluating user source.
    Undefined,
    Function {
        params: Rc<Vec<crate::ast::Identifier>>,
        body: Rc<crate::ast::BlockStatement>,
        env: Rc<RefCell<Environment>>,
    },
    /// A constant-like built-in such as `PI`: reading its name yields the
    /// wrapped value directly.
    BuiltinObject(Box<Value>),
    BuiltinFunction(&'static str, BuiltinFn),
    Array(Vec<Value>),
    /// Keyed by [`hash_key`] rather than by `Value` itself, since `Value`
    /// has no total equality/hash of its own.
    Hash(HashMap<String, (Value, Value)>),
}

impl Value {
    /// The name used in runtime type-mismatch and built-in argument
    /// errors (§6.3).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "NIL",
            Value::Number(_) => "NUMBER",
            Value::String(_) => "STRING",
            Value::Boolean(_) => "BOOLEAN",
            Value::Return(_) => "RETURN",
            Value::Error(_) => "ERROR",
            Value::Undefined => "UNDEFINED",
            Value::Function { .. } => "FUNCTION",
            Value::BuiltinObject(_) => "BUILTIN OBJECT",
            Value::BuiltinFunction(..) => "BUILTIN FUNCTION",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
        }
    }

    /// Every value except `Nil`, `Boolean(false)`, and `Undefined` is
    /// truthy, including `Number(0.0)`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Boolean(false) | Value::Undefined)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// The display form used by `print` and test diagnostics (§6.2).
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Boolean(true) => write!(f, "True"),
            Value::Boolean(false) => write!(f, "False"),
            Value::Return(v) => write!(f, "{v}"),
            Value::Error(message) => write!(f, "ERROR: {message}"),
            Value::Undefined => write!(f, "Undefined"),
            Value::Function { .. } => write!(f, "<function: fn>"),
            Value::BuiltinObject(inner) => write!(f, "<builtin: {}>", inner.inspect()),
            Value::BuiltinFunction(name, _) => write!(f, "<builtin-function: {name}>"),
            Value::Array(items) => {
                let items = items
                    .iter()
                    .map(|v| v.inspect())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{items}]")
            }
            Value::Hash(pairs) => {
                let items = pairs
                    .values()
                    .map(|(k, v)| format!("{}:{}", k.inspect(), v.inspect()))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{items}}}")
            }
        }
    }
}

/// Derives the key a value is stored/looked-up under in a [`Value::Hash`].
///
/// Only `Number`, `String`, and `Boolean` are hashable, per the language's
/// own notion of "usable as a hash key". The kind tag (`"N:5"` vs
/// `"S:5"`) resolves the reference spec's documented key collision
/// between a Number and the String that stringifies the same way.
pub fn hash_key(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(format!("N:{n}")),
        Value::String(s) => Some(format!("S:{s}")),
        Value::Boolean(b) => Some(format!("B:{}", if *b { 1 } else { 0 })),
        _ => None,
    }
}
