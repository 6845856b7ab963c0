//! object-utils - generic operations over a dynamic value tree.
//!
//! Provides deep cloning (plain and change-aware), deep freezing, structural
//! equality and shallow diffing, deep/shallow merging, keyword matching and
//! circular-safe JSON stringification for [`Value`] trees.
//!
//! ```
//! use object_utils::{deep_clone, equals, Value};
//! use serde_json::json;
//!
//! let original = Value::from(json!({"a": {"b": [1, 2]}}));
//! let copy = deep_clone(&original);
//! assert!(equals(&original, &copy));
//! assert!(!original.ptr_eq(&copy));
//! ```

mod access;
mod clone;
mod equal;
mod error;
mod freeze;
mod keywords;
mod mixin;
mod stringify;
mod value;

pub mod is;

pub use access::{filter, get_case_insensitive, get_or_default, map_values};
pub use clone::{clone_and_change, deep_clone};
pub use equal::{distinct, equals};
pub use error::ObjectsError;
pub use freeze::deep_freeze;
pub use keywords::{array_to_hash, create_keyword_matcher, KeywordMatcher};
pub use mixin::{assign, mixin};
pub use stringify::safe_stringify;
pub use value::{ArrayRef, Map, ObjectRef, Value};
