//! JSON stringification that tolerates cycles.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map as JsonMap, Serializer, Value as JsonValue};

use crate::value::{finite_number_text, json_number, Value};

const CIRCULAR: &str = "[Circular]";

/// Compact formatter whose floats follow the usual JSON text conventions:
/// integral values below `1e21` print in full and exponents carry an
/// explicit sign (`1e+300`, `1e-7`).
struct SignedExponentFormatter;

impl Formatter for SignedExponentFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(finite_number_text(value).as_bytes())
    }
}

fn render(json: &JsonValue) -> String {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, SignedExponentFormatter);
    match json.serialize(&mut ser) {
        Ok(()) => String::from_utf8(out).unwrap_or_else(|_| json.to_string()),
        Err(_) => json.to_string(),
    }
}

/// Serializes `value` to compact JSON text.
///
/// Any array or object met a second time during the call, whether through a
/// cycle or because it is shared, is written as the string `"[Circular]"`.
/// Otherwise JSON rules apply: object members holding `undefined` are left
/// out, `undefined` array slots and non-finite numbers become `null`, and
/// regexes become `{}`. Numbers use the shortest round-trip form with a
/// signed exponent (`1e+300`). A top-level `undefined` yields `None`.
pub fn safe_stringify(value: &Value) -> Option<String> {
    if value.is_undefined() {
        return None;
    }
    let mut seen = Vec::new();
    Some(render(&to_json_marked(value, &mut seen)))
}

fn to_json_marked(value: &Value, seen: &mut Vec<usize>) -> JsonValue {
    if let Some(id) = value.node_id() {
        if seen.contains(&id) {
            return JsonValue::String(CIRCULAR.to_string());
        }
        seen.push(id);
    }
    match value {
        Value::Undefined | Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => json_number(*n),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::RegExp(_) => JsonValue::Object(JsonMap::new()),
        Value::Array(arr) => JsonValue::Array(
            arr.to_vec()
                .iter()
                .map(|item| to_json_marked(item, seen))
                .collect(),
        ),
        Value::Object(obj) => {
            let mut map = JsonMap::new();
            for (key, item) in obj.entries() {
                if !item.is_undefined() {
                    map.insert(key, to_json_marked(&item, seen));
                }
            }
            JsonValue::Object(map)
        }
    }
}
