//! Conversions between [`Value`] and `serde_json::Value`.

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use super::{ArrayRef, ObjectRef, Value};
use crate::error::ObjectsError;

/// JSON number for `n`. Integral values within the exactly representable
/// range are emitted as integers (`1`, not `1.0`); non-finite values become
/// `null`.
pub(crate) fn json_number(n: f64) -> JsonValue {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE {
        return JsonValue::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
}

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or_default()),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => {
                Value::Array(ArrayRef::from_vec(items.into_iter().map(Value::from).collect()))
            }
            JsonValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<ObjectRef>(),
            ),
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(v: &JsonValue) -> Self {
        Value::from(v.clone())
    }
}

impl Value {
    /// Converts the tree into a `serde_json::Value`.
    ///
    /// Object members holding `Undefined` are dropped, `Undefined` array
    /// slots and a top-level `Undefined` become `null`, and regexes become
    /// empty objects. Shared (non-cyclic) nodes are written once per
    /// occurrence; a cycle fails with [`ObjectsError::RecursiveStructure`].
    pub fn to_json(&self) -> Result<JsonValue, ObjectsError> {
        let mut ancestors = Vec::new();
        to_json_inner(self, &mut ancestors)
    }
}

fn to_json_inner(value: &Value, ancestors: &mut Vec<usize>) -> Result<JsonValue, ObjectsError> {
    if let Some(id) = value.node_id() {
        if ancestors.contains(&id) {
            return Err(ObjectsError::RecursiveStructure);
        }
        ancestors.push(id);
    }
    let out = match value {
        Value::Undefined | Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => json_number(*n),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::RegExp(_) => JsonValue::Object(JsonMap::new()),
        Value::Array(arr) => {
            let mut items = Vec::with_capacity(arr.len());
            for item in arr.to_vec() {
                items.push(to_json_inner(&item, ancestors)?);
            }
            JsonValue::Array(items)
        }
        Value::Object(obj) => {
            let mut map = JsonMap::new();
            for (key, item) in obj.entries() {
                if item.is_undefined() {
                    continue;
                }
                map.insert(key, to_json_inner(&item, ancestors)?);
            }
            JsonValue::Object(map)
        }
    };
    if value.node_id().is_some() {
        ancestors.pop();
    }
    Ok(out)
}
