//! Property access helpers.

use crate::value::{ObjectRef, Value};

/// Returns `selector(obj)`, or `default` when the selector yields nothing.
///
/// ```
/// use object_utils::get_or_default;
///
/// let point = (3, None::<i32>);
/// assert_eq!(get_or_default(&point, |p| Some(p.0), 0), 3);
/// assert_eq!(get_or_default(&point, |p| p.1, -1), -1);
/// ```
pub fn get_or_default<T, R, F>(obj: T, selector: F, default: R) -> R
where
    F: FnOnce(T) -> Option<R>,
{
    selector(obj).unwrap_or(default)
}

/// Reads `key` from `target`, falling back to the first key that matches
/// ignoring case. Reads as `Undefined` when nothing matches.
pub fn get_case_insensitive(target: &Value, key: &str) -> Value {
    let exact = target.get_key(key);
    if !exact.is_undefined() {
        return exact;
    }
    let Some(entries) = target.own_entries() else {
        return Value::Undefined;
    };
    let lower = key.to_lowercase();
    entries
        .into_iter()
        .find(|(k, _)| k.to_lowercase() == lower)
        .map_or(Value::Undefined, |(_, v)| v)
}

/// New object holding the members of `obj` for which `predicate` holds.
pub fn filter<F>(obj: &ObjectRef, mut predicate: F) -> ObjectRef
where
    F: FnMut(&str, &Value) -> bool,
{
    obj.entries()
        .into_iter()
        .filter(|(key, value)| predicate(key.as_str(), value))
        .collect()
}

/// New object with the same keys as `obj` and every value mapped by `f`.
pub fn map_values<F>(obj: &ObjectRef, mut f: F) -> ObjectRef
where
    F: FnMut(&Value, &str) -> Value,
{
    obj.entries()
        .into_iter()
        .map(|(key, value)| {
            let mapped = f(&value, key.as_str());
            (key, mapped)
        })
        .collect()
}
