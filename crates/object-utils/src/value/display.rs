//! String forms of a [`Value`].
//!
//! `Display` yields the loose string conversion used for hash keys (arrays
//! join their elements with `,`, objects print as `[object Object]`).
//! `Debug` yields the circular-safe JSON text, so failing assertions show the
//! actual tree.

use std::fmt;

use serde_json::Number;

use super::Value;
use crate::stringify::safe_stringify;

/// Shortest textual form of a number; integral values print without a
/// fractional part and negative zero prints as `0`.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    finite_number_text(n)
}

/// Text of a finite number: integral values below `1e21` in full, anything
/// else in shortest round-trip form with a signed exponent (`1e+300`).
pub(crate) fn finite_number_text(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e21 {
        return format!("{n:.0}");
    }
    let Some(number) = Number::from_f64(n) else {
        return "null".to_string();
    };
    let text = number.to_string();
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_loose(self, f, &mut Vec::new())
    }
}

/// `joining` holds the arrays currently being printed; an array met again
/// inside itself prints as empty.
fn write_loose(value: &Value, f: &mut fmt::Formatter<'_>, joining: &mut Vec<usize>) -> fmt::Result {
    match value {
        Value::Undefined => f.write_str("undefined"),
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => f.write_str(&format_number(*n)),
        Value::String(s) => f.write_str(s),
        Value::RegExp(re) => write!(f, "/{}/", re.as_str()),
        Value::Array(arr) => {
            if joining.contains(&arr.id()) {
                return Ok(());
            }
            joining.push(arr.id());
            for (i, item) in arr.to_vec().iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                match item {
                    Value::Undefined | Value::Null => {}
                    other => write_loose(other, f, joining)?,
                }
            }
            joining.pop();
            Ok(())
        }
        Value::Object(_) => f.write_str("[object Object]"),
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match safe_stringify(self) {
            Some(text) => f.write_str(&text),
            None => f.write_str("undefined"),
        }
    }
}
