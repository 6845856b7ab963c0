//! Deep and shallow merging into an existing object.

use crate::error::ObjectsError;
use crate::is::is_object;
use crate::value::{ObjectRef, Value};

/// Copies the members of `source` into `destination` and returns
/// `destination`.
///
/// - a key missing from `destination` is always added;
/// - an existing key is only touched when `overwrite` is set, in which case
///   two objects are merged recursively and anything else is replaced;
/// - when `destination` is not an object, `source` is returned untouched;
/// - when `source` is not an object, `destination` is returned untouched.
///
/// Incoming values are shared, not copied. Writing into a frozen node fails
/// with [`ObjectsError::Frozen`]; members written before the failure stay.
pub fn mixin(destination: &Value, source: &Value, overwrite: bool) -> Result<Value, ObjectsError> {
    let Value::Object(dest) = destination else {
        return Ok(source.clone());
    };
    let Value::Object(src) = source else {
        return Ok(destination.clone());
    };
    for (key, incoming) in src.entries() {
        match dest.get(&key) {
            Some(existing) if overwrite => {
                if is_object(&existing) && is_object(&incoming) {
                    mixin(&existing, &incoming, overwrite)?;
                } else {
                    dest.insert(key, incoming)?;
                }
            }
            Some(_) => {}
            None => {
                dest.insert(key, incoming)?;
            }
        }
    }
    Ok(destination.clone())
}

/// Shallow merge: copies every own member of each source into `destination`
/// in order, later sources winning. Array sources contribute their indices
/// as keys; primitive, `null` and `undefined` sources are skipped.
pub fn assign(destination: &ObjectRef, sources: &[Value]) -> Result<ObjectRef, ObjectsError> {
    for source in sources {
        let Some(entries) = source.own_entries() else {
            continue;
        };
        for (key, value) in entries {
            destination.insert(key, value)?;
        }
    }
    Ok(destination.clone())
}
