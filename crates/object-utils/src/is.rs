//! Type predicates over [`Value`].

use crate::value::Value;

/// `true` for plain objects only; arrays, regexes and `null` are not objects.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// `true` for numbers other than `NaN`.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if !n.is_nan())
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_regexp(value: &Value) -> bool {
    matches!(value, Value::RegExp(_))
}

pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

pub fn is_undefined_or_null(value: &Value) -> bool {
    matches!(value, Value::Undefined | Value::Null)
}

/// `true` for a plain object without own keys.
pub fn is_empty_object(value: &Value) -> bool {
    match value {
        Value::Object(obj) => obj.is_empty(),
        _ => false,
    }
}
