//! Scalar value type produced by the parser.
//!
//! JSON's four scalar tags (null, false, true, number) map onto three
//! variants here - booleans carry their truth payload instead of
//! splitting into separate tags.

/// A parsed JSON scalar.
///
/// No heap behind any variant; values are `Copy` and owned outright by
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Null: `null`
    Null,

    /// Boolean: `true` or `false` (lowercase only)
    Bool(bool),

    /// Number: `42`, `3.14`, `1.5e-3`, etc.
    Number(f64),
}

/// The active variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
}

impl Value {
    /// The active variant tag.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
        }
    }

    /// Check if this is the null value.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as boolean.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as number. `None` unless the tag is Number - callers
    /// must check the tag rather than assume a payload.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}
