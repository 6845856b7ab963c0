//! End-to-end behaviour of the public object operations.

use object_utils::{
    array_to_hash, assign, clone_and_change, create_keyword_matcher, deep_clone, deep_freeze,
    distinct, equals, get_or_default, mixin, safe_stringify, ArrayRef, ObjectRef, ObjectsError,
    Value,
};
use serde_json::json;

fn v(doc: serde_json::Value) -> Value {
    Value::from(doc)
}

// ---------------------------------------------------------------------------
// deep_clone
// ---------------------------------------------------------------------------

#[test]
fn deep_clone_equal_but_not_shared() {
    let original = v(json!({"a": [1, {"b": null}], "c": "s"}));
    let copy = deep_clone(&original);
    assert!(equals(&original, &copy));
    assert!(!copy.ptr_eq(&original));
    assert!(!copy.get_key("a").ptr_eq(&original.get_key("a")));
    assert!(!copy
        .get_key("a")
        .get_key("1")
        .ptr_eq(&original.get_key("a").get_key("1")));
}

#[test]
fn deep_clone_of_primitive_is_itself() {
    for value in [Value::Null, Value::Undefined, Value::from(3), Value::from("x")] {
        assert!(deep_clone(&value).ptr_eq(&value));
    }
}

#[test]
fn deep_clone_is_independent() {
    let original = v(json!({"list": [1]}));
    let copy = deep_clone(&original);
    copy.get_key("list").as_array().unwrap().push(2).unwrap();
    assert_eq!(original, v(json!({"list": [1]})));
    assert_eq!(copy, v(json!({"list": [1, 2]})));
}

// ---------------------------------------------------------------------------
// deep_freeze
// ---------------------------------------------------------------------------

#[test]
fn deep_freeze_returns_input_and_blocks_writes() {
    let doc = v(json!({"a": {"b": [1]}}));
    let out = deep_freeze(&doc);
    assert!(out.ptr_eq(&doc));
    let list = doc.get_key("a").get_key("b");
    assert_eq!(list.as_array().unwrap().push(2), Err(ObjectsError::Frozen));
    assert_eq!(doc, v(json!({"a": {"b": [1]}})));
}

#[test]
fn deep_freeze_twice_on_cycle() {
    let obj = ObjectRef::new();
    obj.insert("me", obj.clone()).unwrap();
    let root = Value::Object(obj.clone());
    deep_freeze(&root);
    deep_freeze(&root);
    assert!(obj.is_frozen());
}

// ---------------------------------------------------------------------------
// clone_and_change
// ---------------------------------------------------------------------------

#[test]
fn clone_and_change_without_replacement() {
    let doc = v(json!({"a": {"b": 1}}));
    let out = clone_and_change(&doc, |_| None).unwrap();
    assert!(equals(&doc, &out));
    assert!(!out.get_key("a").ptr_eq(&doc.get_key("a")));
}

#[test]
fn clone_and_change_replaces_strings() {
    let doc = v(json!({"path": "/a", "nested": ["/b", 1]}));
    let out = clone_and_change(&doc, |value| {
        value.as_str().map(|s| Value::from(format!("file://{s}")))
    })
    .unwrap();
    assert_eq!(out, v(json!({"path": "file:///a", "nested": ["file:///b", 1]})));
}

#[test]
fn clone_and_change_keeps_nulls_untouched() {
    let doc = v(json!({"a": null, "b": [null, 1]}));
    let out = clone_and_change(&doc, |value| {
        assert!(!value.is_null(), "changer called with null");
        value.as_f64().map(|_| Value::from("x"))
    })
    .unwrap();
    assert_eq!(out, v(json!({"a": null, "b": [null, "x"]})));
}

#[test]
fn clone_and_change_rejects_ancestor() {
    let child = ObjectRef::new();
    let root: ObjectRef = [("child", child.clone())].into_iter().collect();
    child.insert("parent", root.clone()).unwrap();
    let err = clone_and_change(&Value::Object(root), |_| None).unwrap_err();
    assert_eq!(err, ObjectsError::RecursiveStructure);
}

// ---------------------------------------------------------------------------
// mixin / assign
// ---------------------------------------------------------------------------

#[test]
fn mixin_matrix() {
    let cases = [
        (json!({"a": 1}), json!({"a": 2}), true, json!({"a": 2})),
        (json!({"a": 1}), json!({"a": 2}), false, json!({"a": 1})),
        (json!({"a": {"x": 1}}), json!({"a": {"y": 2}}), true, json!({"a": {"x": 1, "y": 2}})),
        (json!({}), json!({"n": [1]}), false, json!({"n": [1]})),
        (json!({"a": [1]}), json!({"a": {"k": 1}}), true, json!({"a": {"k": 1}})),
    ];
    for (dest, source, overwrite, expected) in cases {
        let dest = v(dest);
        let out = mixin(&dest, &v(source), overwrite).unwrap();
        assert!(out.ptr_eq(&dest));
        assert_eq!(out, v(expected));
    }
}

#[test]
fn mixin_with_non_object_destination_returns_source() {
    let source = v(json!({"a": 1}));
    let out = mixin(&v(json!([1])), &source, true).unwrap();
    assert!(out.ptr_eq(&source));
}

#[test]
fn assign_shallow_in_order() {
    let dest: ObjectRef = [("a", 0)].into_iter().collect();
    let sources = [v(json!({"a": 1, "b": {"c": 1}})), v(json!({"b": {"d": 2}}))];
    let out = assign(&dest, &sources).unwrap();
    assert_eq!(Value::Object(out), v(json!({"a": 1, "b": {"d": 2}})));
}

// ---------------------------------------------------------------------------
// equals / distinct
// ---------------------------------------------------------------------------

#[test]
fn equals_matrix() {
    let cases = [
        (json!([1, 2, 3]), json!([1, 2, 3]), true),
        (json!({"a": 1, "b": 2}), json!({"b": 2, "a": 1}), true),
        (json!([1, 2]), json!([2, 1]), false),
        (json!({"a": [1, {"b": 2}]}), json!({"a": [1, {"b": 2}]}), true),
        (json!({"a": [1, {"b": 2}]}), json!({"a": [1, {"b": 3}]}), false),
        (json!(null), json!({}), false),
        (json!([]), json!({}), false),
        (json!("a"), json!("a"), true),
        (json!(1), json!(1.0), true),
    ];
    for (a, b, expected) in cases {
        assert_eq!(equals(&v(a.clone()), &v(b.clone())), expected, "{a} vs {b}");
        assert_eq!(equals(&v(b.clone()), &v(a.clone())), expected, "{b} vs {a}");
    }
}

#[test]
fn distinct_matrix() {
    let out = distinct(&v(json!({"a": 1, "b": 2})), &v(json!({"a": 1, "b": 3, "c": 4})));
    assert_eq!(Value::Object(out), v(json!({"b": 3, "c": 4})));

    let out = distinct(&v(json!({"a": 1, "gone": true})), &v(json!({"a": 1})));
    assert!(out.is_empty());
}

#[test]
fn distinct_against_array_uses_canonical_indices() {
    let out = distinct(&v(json!([1, 2])), &v(json!({"01": 2, "+0": 1, "1": 2})));
    assert_eq!(out.keys(), vec!["01", "+0"]);
}

// ---------------------------------------------------------------------------
// safe_stringify
// ---------------------------------------------------------------------------

#[test]
fn safe_stringify_marks_self_reference() {
    let obj = ObjectRef::new();
    obj.insert("name", "loop").unwrap();
    obj.insert("again", obj.clone()).unwrap();
    let text = safe_stringify(&Value::Object(obj)).unwrap();
    assert!(text.contains("\"[Circular]\""));
    assert_eq!(text, r#"{"name":"loop","again":"[Circular]"}"#);
}

#[test]
fn safe_stringify_marks_array_cycle() {
    let arr = ArrayRef::new();
    arr.push(1).unwrap();
    arr.push(arr.clone()).unwrap();
    assert_eq!(safe_stringify(&Value::Array(arr)).unwrap(), r#"[1,"[Circular]"]"#);
}

#[test]
fn safe_stringify_signs_exponents() {
    let doc = v(json!({"big": 1e300, "small": 1e-7, "half": 0.5}));
    assert_eq!(
        safe_stringify(&doc).unwrap(),
        r#"{"big":1e+300,"small":1e-7,"half":0.5}"#
    );
}

// ---------------------------------------------------------------------------
// keyword matching / hashes / defaults
// ---------------------------------------------------------------------------

#[test]
fn keyword_matcher_case_handling() {
    assert!(create_keyword_matcher(["if", "else"], true).matches("IF"));
    assert!(!create_keyword_matcher(["if", "else"], false).matches("IF"));
}

#[test]
fn array_to_hash_marks_members() {
    let hash = array_to_hash([1, 2, 2]);
    assert_eq!(hash.len(), 2);
    assert!(hash["1"] && hash["2"]);
}

#[test]
fn array_to_hash_with_cyclic_array() {
    let arr = ArrayRef::new();
    arr.push("a").unwrap();
    arr.push(arr.clone()).unwrap();
    let hash = array_to_hash([Value::Array(arr), Value::from("b")]);
    assert_eq!(hash.keys().collect::<Vec<_>>(), vec!["a,", "b"]);
}

#[test]
fn get_or_default_falls_back() {
    let doc = v(json!({"port": 8080}));
    assert_eq!(get_or_default(&doc, |d| d.get_key("port").as_f64(), 80.0), 8080.0);
    let host = get_or_default(
        &doc,
        |d| d.get_key("host").as_str().map(str::to_owned),
        "localhost".to_owned(),
    );
    assert_eq!(host, "localhost");
}
