//! Shared, freezable container nodes.
//!
//! [`ObjectRef`] and [`ArrayRef`] are cheap handles: cloning one shares the
//! underlying node, so two handles can observe each other's writes and a
//! node can (directly or indirectly) contain itself.

use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use super::Value;
use crate::error::ObjectsError;

/// Insertion-ordered key/value storage of an object node.
pub type Map = IndexMap<String, Value>;

struct Node<T> {
    data: RefCell<T>,
    frozen: Cell<bool>,
}

impl<T> Node<T> {
    fn new(data: T) -> Rc<Self> {
        Rc::new(Node {
            data: RefCell::new(data),
            frozen: Cell::new(false),
        })
    }

    fn check_writable(&self) -> Result<(), ObjectsError> {
        if self.frozen.get() {
            tracing::debug!("rejected write into frozen node");
            return Err(ObjectsError::Frozen);
        }
        Ok(())
    }
}

/// Handle to a plain object node.
#[derive(Clone)]
pub struct ObjectRef(Rc<Node<Map>>);

impl ObjectRef {
    pub fn new() -> Self {
        Self::from_map(Map::new())
    }

    pub fn from_map(map: Map) -> Self {
        ObjectRef(Node::new(map))
    }

    pub fn len(&self) -> usize {
        self.0.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.data.borrow().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.data.borrow().contains_key(key)
    }

    /// Returns the value stored under `key`, sharing container nodes.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.data.borrow().get(key).cloned()
    }

    /// Own keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.0.data.borrow().keys().cloned().collect()
    }

    /// Snapshot of the entries in insertion order.
    ///
    /// Traversals iterate over a snapshot so that callbacks may freely write
    /// into the node being visited.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .data
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Borrow the underlying map for reading.
    pub fn borrow(&self) -> Ref<'_, Map> {
        self.0.data.borrow()
    }

    /// Sets `key` to `value`, returning the previous value.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(
        &self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ObjectsError> {
        self.0.check_writable()?;
        Ok(self.0.data.borrow_mut().insert(key.into(), value.into()))
    }

    /// Deletes `key`, preserving the order of the remaining keys.
    pub fn remove(&self, key: &str) -> Result<Option<Value>, ObjectsError> {
        self.0.check_writable()?;
        Ok(self.0.data.borrow_mut().shift_remove(key))
    }

    /// Shallow freeze: this node rejects writes from now on.
    pub fn freeze(&self) {
        self.0.frozen.set(true);
    }

    pub fn is_frozen(&self) -> bool {
        self.0.frozen.get()
    }

    /// Reference equality.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl Default for ObjectRef {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::Object(self.clone()), f)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ObjectRef {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ObjectRef::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Handle to an ordered sequence node.
#[derive(Clone)]
pub struct ArrayRef(Rc<Node<Vec<Value>>>);

impl ArrayRef {
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    pub fn from_vec(items: Vec<Value>) -> Self {
        ArrayRef(Node::new(items))
    }

    pub fn len(&self) -> usize {
        self.0.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.data.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.data.borrow().get(index).cloned()
    }

    /// Snapshot of the elements.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.data.borrow().clone()
    }

    pub fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.data.borrow()
    }

    pub fn push(&self, value: impl Into<Value>) -> Result<(), ObjectsError> {
        self.0.check_writable()?;
        self.0.data.borrow_mut().push(value.into());
        Ok(())
    }

    /// Stores `value` at `index`; writing past the end fills the gap with
    /// [`Value::Undefined`]. An index whose gap cannot be allocated fails
    /// with [`ObjectsError::IndexOutOfRange`] and leaves the array unchanged.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Result<(), ObjectsError> {
        self.0.check_writable()?;
        let mut items = self.0.data.borrow_mut();
        if index >= items.len() {
            let new_len = index
                .checked_add(1)
                .ok_or(ObjectsError::IndexOutOfRange(index))?;
            let additional = new_len - items.len();
            items
                .try_reserve(additional)
                .map_err(|_| ObjectsError::IndexOutOfRange(index))?;
            items.resize(new_len, Value::Undefined);
        }
        items[index] = value.into();
        Ok(())
    }

    pub fn freeze(&self) {
        self.0.frozen.set(true);
    }

    pub fn is_frozen(&self) -> bool {
        self.0.frozen.get()
    }

    pub fn ptr_eq(&self, other: &ArrayRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl Default for ArrayRef {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ArrayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::Array(self.clone()), f)
    }
}

impl<V: Into<Value>> FromIterator<V> for ArrayRef {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        ArrayRef::from_vec(iter.into_iter().map(Into::into).collect())
    }
}
