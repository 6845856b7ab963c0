//! The dynamic value tree every object operation works on.
//!
//! Primitives are stored inline. Arrays and objects live behind shared
//! handles ([`ArrayRef`], [`ObjectRef`]) so that reference identity, aliasing
//! and cycles can be represented. Regular expressions are opaque leaves that
//! are shared by reference and never traversed.

mod display;
mod json;
mod node;

use std::rc::Rc;

use regex::Regex;

use crate::error::ObjectsError;

pub use node::{ArrayRef, Map, ObjectRef};

pub(crate) use display::finite_number_text;
pub(crate) use json::json_number;

#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    RegExp(Rc<Regex>),
    Array(ArrayRef),
    Object(ObjectRef),
}

impl Value {
    /// Builds an object node from key/value pairs.
    pub fn object<K, V, I>(entries: I) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(entries.into_iter().collect())
    }

    /// Builds an array node from elements.
    pub fn array<V, I>(items: I) -> Value
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Array(items.into_iter().collect())
    }

    pub fn regex(pattern: &str) -> Result<Value, ObjectsError> {
        Ok(Value::RegExp(Rc::new(Regex::new(pattern)?)))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Identity comparison.
    ///
    /// Container and regex values are identical when they share a node;
    /// primitives are identical when they hold the same value (`NaN` is never
    /// identical to anything).
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::RegExp(a), Value::RegExp(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Own enumerable entries: object members in insertion order, or array
    /// elements keyed by their index. `None` for every other value.
    pub fn own_entries(&self) -> Option<Vec<(String, Value)>> {
        match self {
            Value::Object(obj) => Some(obj.entries()),
            Value::Array(arr) => Some(
                arr.to_vec()
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Property read: a missing key, or a non-container receiver, reads as
    /// [`Value::Undefined`]. Arrays are only indexed by canonical decimal
    /// keys, so `"01"` or `"+0"` never reach an element.
    pub fn get_key(&self, key: &str) -> Value {
        let found = match self {
            Value::Object(obj) => obj.get(key),
            Value::Array(arr) => key
                .parse::<usize>()
                .ok()
                .filter(|i| i.to_string() == key)
                .and_then(|i| arr.get(i)),
            _ => None,
        };
        found.unwrap_or(Value::Undefined)
    }

    /// Identity of a container node, used by traversals that track visited
    /// nodes.
    pub(crate) fn node_id(&self) -> Option<usize> {
        match self {
            Value::Array(arr) => Some(arr.id()),
            Value::Object(obj) => Some(obj.id()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    /// Structural equality as defined by [`crate::equals`].
    fn eq(&self, other: &Value) -> bool {
        crate::equal::equals(self, other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<ArrayRef> for Value {
    fn from(arr: ArrayRef) -> Self {
        Value::Array(arr)
    }
}

impl From<ObjectRef> for Value {
    fn from(obj: ObjectRef) -> Self {
        Value::Object(obj)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
