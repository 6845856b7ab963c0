//! Deep freezing.

use std::collections::VecDeque;

use crate::value::Value;

/// Freezes every array and object node reachable from `value` and returns
/// the same handle.
///
/// Nodes are visited breadth-first from the root. A node that is already
/// frozen is not expanded again, which makes the call idempotent and lets it
/// terminate on cyclic graphs. Regexes are immutable leaves and are skipped.
pub fn deep_freeze(value: &Value) -> Value {
    let mut queue = VecDeque::from([value.clone()]);
    let mut frozen = 0usize;
    while let Some(next) = queue.pop_front() {
        let children: Vec<Value> = match &next {
            Value::Object(obj) if !obj.is_frozen() => {
                obj.freeze();
                obj.entries().into_iter().map(|(_, v)| v).collect()
            }
            Value::Array(arr) if !arr.is_frozen() => {
                arr.freeze();
                arr.to_vec()
            }
            _ => continue,
        };
        frozen += 1;
        queue.extend(children.into_iter().filter(|child| child.node_id().is_some()));
    }
    tracing::trace!(frozen, "deep freeze finished");
    value.clone()
}
