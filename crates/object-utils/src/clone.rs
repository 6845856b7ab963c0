//! Deep cloning of value trees.

use crate::error::ObjectsError;
use crate::value::{ArrayRef, ObjectRef, Value};

/// Returns a structurally equal copy of `value` in which every array and
/// object node is new (and unfrozen).
///
/// Primitives are copied and regexes are shared by reference. There is no
/// cycle detection: a cyclic input recurses until the stack is exhausted, so
/// use [`clone_and_change`] when the input may be cyclic.
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Array(arr) => Value::Array(ArrayRef::from_vec(
            arr.to_vec().iter().map(deep_clone).collect(),
        )),
        Value::Object(obj) => Value::Object(
            obj.entries()
                .into_iter()
                .map(|(key, item)| (key, deep_clone(&item)))
                .collect::<ObjectRef>(),
        ),
        other => other.clone(),
    }
}

/// Deep clone that lets `changer` substitute any node.
///
/// `changer` is called on every node in pre-order, root first, except for
/// `null` and `undefined`, which are copied without consulting it. When it
/// returns `Some(replacement)` the replacement is used verbatim and its
/// children are not visited. Otherwise arrays and objects are copied with
/// their children processed the same way, and every other value is returned
/// as-is.
///
/// A node reached again while still on the current path fails with
/// [`ObjectsError::RecursiveStructure`]. Nodes shared between siblings are
/// not cycles and are copied once per occurrence.
///
/// ```
/// use object_utils::{clone_and_change, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"a": 1, "b": "x"}));
/// let out = clone_and_change(&doc, |v| v.as_f64().map(|n| Value::from(n * 10.0))).unwrap();
/// assert_eq!(out, Value::from(json!({"a": 10, "b": "x"})));
/// ```
pub fn clone_and_change<F>(value: &Value, mut changer: F) -> Result<Value, ObjectsError>
where
    F: FnMut(&Value) -> Option<Value>,
{
    let mut ancestors = Vec::new();
    clone_and_change_inner(value, &mut changer, &mut ancestors)
}

fn clone_and_change_inner<F>(
    value: &Value,
    changer: &mut F,
    ancestors: &mut Vec<usize>,
) -> Result<Value, ObjectsError>
where
    F: FnMut(&Value) -> Option<Value>,
{
    if matches!(value, Value::Null | Value::Undefined) {
        return Ok(value.clone());
    }
    if let Some(changed) = changer(value) {
        return Ok(changed);
    }
    match value {
        Value::Array(arr) => {
            enter(arr.id(), ancestors)?;
            let mut items = Vec::with_capacity(arr.len());
            for item in arr.to_vec() {
                items.push(clone_and_change_inner(&item, changer, ancestors)?);
            }
            ancestors.pop();
            Ok(Value::Array(ArrayRef::from_vec(items)))
        }
        Value::Object(obj) => {
            enter(obj.id(), ancestors)?;
            let copy = ObjectRef::new();
            for (key, item) in obj.entries() {
                copy.insert(key, clone_and_change_inner(&item, changer, ancestors)?)?;
            }
            ancestors.pop();
            Ok(Value::Object(copy))
        }
        other => Ok(other.clone()),
    }
}

fn enter(id: usize, ancestors: &mut Vec<usize>) -> Result<(), ObjectsError> {
    if ancestors.contains(&id) {
        tracing::debug!(depth = ancestors.len(), "recursive data-structure rejected");
        return Err(ObjectsError::RecursiveStructure);
    }
    ancestors.push(id);
    Ok(())
}
