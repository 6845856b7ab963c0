//! Structural equality and one-level diffing.

use crate::value::{ObjectRef, Value};

/// Deep structural equality.
///
/// Identical operands are equal: the same container node, or primitives
/// holding the same value. Anything else involving `null` or `undefined`,
/// or operands of different kinds (including array vs object), is unequal.
/// Arrays compare by length and then element-wise in order; objects compare
/// their sorted key lists and then the values under each key. `NaN` is not
/// equal to itself.
///
/// Regexes are equal when their source patterns are equal. This is stricter
/// than treating a regex as an object without own keys, under which any two
/// regexes would compare equal.
pub fn equals(one: &Value, other: &Value) -> bool {
    if one.ptr_eq(other) {
        return true;
    }
    match (one, other) {
        (Value::Array(a), Value::Array(b)) => {
            let a = a.to_vec();
            let b = b.to_vec();
            a.len() == b.len() && a.iter().zip(&b).all(|(x, y)| equals(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            let mut keys_a = a.keys();
            let mut keys_b = b.keys();
            if keys_a.len() != keys_b.len() {
                return false;
            }
            keys_a.sort_unstable();
            keys_b.sort_unstable();
            if keys_a != keys_b {
                return false;
            }
            keys_a.iter().all(|key| {
                let x = a.get(key).unwrap_or_default();
                let y = b.get(key).unwrap_or_default();
                equals(&x, &y)
            })
        }
        // pattern equality, not key-less object equality
        (Value::RegExp(a), Value::RegExp(b)) => a.as_str() == b.as_str(),
        _ => false,
    }
}

/// Returns a new object holding every member of `target` whose value is not
/// [`equals`] to the value under the same key in `base`. Keys present only
/// in `base` are ignored and values are taken whole, not diffed further.
///
/// The result is empty when either side is not an object or array.
///
/// ```
/// use object_utils::{distinct, Value};
/// use serde_json::json;
///
/// let base = Value::from(json!({"a": 1, "b": 2}));
/// let target = Value::from(json!({"a": 1, "b": 3, "c": 4}));
/// assert_eq!(Value::Object(distinct(&base, &target)), Value::from(json!({"b": 3, "c": 4})));
/// ```
pub fn distinct(base: &Value, target: &Value) -> ObjectRef {
    if base.node_id().is_none() {
        return ObjectRef::new();
    }
    let Some(entries) = target.own_entries() else {
        return ObjectRef::new();
    };
    entries
        .into_iter()
        .filter(|(key, value)| !equals(&base.get_key(key), value))
        .collect()
}
