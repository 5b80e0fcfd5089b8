//! Exercise argument and result values.
//!
//! Exercises traffic in a small closed set of shapes: integers, floats,
//! booleans, text, and (possibly nested) lists of those. A single tagged
//! enum keeps comparison and reporting total over everything a catalog
//! can declare.

use std::fmt;

use serde::Serialize;

/// A value passed to or returned from an exercise.
///
/// Serializes untagged so report payloads read naturally
/// (`64`, `[9, 10]`, `"abc"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// The integer inside, or a panic. Calling this on any other shape
    /// means the catalog's examples and body disagree about arity or
    /// types, which is a harness contract violation, not run data.
    #[track_caller]
    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(n) => *n,
            other => panic!("expected an integer argument, got {other}"),
        }
    }

    /// The boolean inside, or a panic. See [`Value::as_int`].
    #[track_caller]
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            other => panic!("expected a boolean argument, got {other}"),
        }
    }

    /// The text inside, or a panic. See [`Value::as_int`].
    #[track_caller]
    pub fn as_text(&self) -> &str {
        match self {
            Value::Text(s) => s,
            other => panic!("expected a text argument, got {other}"),
        }
    }

    /// The list elements inside, or a panic. See [`Value::as_int`].
    #[track_caller]
    pub fn as_list(&self) -> &[Value] {
        match self {
            Value::List(items) => items,
            other => panic!("expected a list argument, got {other}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// Build a literal argument tuple from anything convertible to [`Value`].
///
/// ```
/// use descent_harness::args;
/// use descent_harness::value::Value;
///
/// assert_eq!(args![2, 6], vec![Value::Int(2), Value::Int(6)]);
/// assert_eq!(args![vec![9, 10]], vec![Value::from(vec![9, 10])]);
/// ```
#[macro_export]
macro_rules! args {
    ($($x:expr),* $(,)?) => {
        vec![$($crate::value::Value::from($x)),*]
    };
}

/// An argument tuple rendered the way a call site reads: `(2, 6)`.
///
/// Failure payloads carry these so the reporting layer gets both a
/// human-readable `Display` and a structured serialization for free.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArgList(pub Vec<Value>);

impl fmt::Display for ArgList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}
