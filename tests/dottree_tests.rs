//! Integration tests for the public `DotTree` surface.

use std::rc::Rc;

use dottree::{dot, shared, DotTree, Value};
use serde_json::json;

/// Two-record fixture used throughout: a sequence of mappings.
fn people() -> DotTree {
    dot(json!([
        {"first_name": "Ada", "last_name": "Lovelace"},
        {"first_name": "Grace", "last_name": "Hopper"},
    ]))
}

/// `all` hands back the stored root unchanged.
#[test]
fn test_all_returns_the_source() {
    assert_eq!(
        people().all(),
        Value::from(json!([
            {"first_name": "Ada", "last_name": "Lovelace"},
            {"first_name": "Grace", "last_name": "Hopper"},
        ]))
    );
}

/// Construction from another container copies its resolved root.
#[test]
fn test_set_array_from_another_tree() {
    let source = people();
    let mut copy = DotTree::new();
    copy.set_array(&source);
    assert_eq!(copy, source);

    // the copy is independent of the source
    copy.set("0.first_name", "Lin");
    assert_eq!(source.get("0.first_name"), Value::from("Ada"));
}

/// A scalar source is coerced into a one-element sequence.
#[test]
fn test_scalar_source_is_coerced() {
    let tree = dot("solo");
    assert_eq!(tree.all(), Value::from(json!(["solo"])));
    assert_eq!(tree.len(), 1);
}

/// External mutation of an aliased root is observable through the container.
#[test]
fn test_set_reference_sees_external_mutation() {
    let items = shared(json!(["Ada", "Lovelace"]));
    let mut tree = DotTree::new();
    tree.set_reference(Rc::clone(&items));

    *items.borrow_mut() = Value::from(json!(["Grace", "Hopper", "Rear Admiral"]));

    assert_eq!(tree.all(), Value::from(json!(["Grace", "Hopper", "Rear Admiral"])));
    assert_eq!(tree.len(), 3);
}

/// Container mutation of an aliased root is observable on the caller's handle.
#[test]
fn test_set_reference_writes_through() {
    let items = shared(json!([{"name": "Ada"}]));
    let mut tree = DotTree::new();
    tree.set_reference(Rc::clone(&items));

    tree.set("0.login", "ada");
    assert_eq!(
        *items.borrow(),
        Value::from(json!([{"name": "Ada", "login": "ada"}]))
    );

    assert!(tree.delete("0.name"));
    assert_eq!(*items.borrow(), Value::from(json!([{"login": "ada"}])));

    tree.clear();
    assert_eq!(*items.borrow(), Value::from(json!([])));
}

/// An unwritten path reads as the default and does not exist.
#[test]
fn test_unwritten_path() {
    let tree = people();
    assert!(!tree.has("0.middle_name"));
    assert_eq!(tree.get("0.middle_name"), Value::Null);
    assert_eq!(tree.get_or("0.middle_name", "n/a"), Value::from("n/a"));
}

/// Wildcard existence holds only when every element matches.
#[test]
fn test_has_wildcard() {
    let tree = people();
    assert!(tree.has("*.first_name"));

    let mut tree = tree;
    assert!(tree.delete("1.first_name"));
    assert!(!tree.has("*.first_name"));
}

/// Wildcard existence and deletion are vacuously true over an empty root.
#[test]
fn test_wildcard_vacuous_over_empty() {
    let mut tree = dot(json!([]));
    assert!(tree.has("*.anything"));
    assert!(tree.delete("*.anything"));
}

/// Wildcard reads fan out in element order.
#[test]
fn test_get_wildcard() {
    assert_eq!(
        people().get("*.first_name"),
        Value::from(json!(["Ada", "Grace"]))
    );
}

/// Literal set/get round-trips, overwriting what was there.
#[test]
fn test_set_then_get() {
    let mut tree = people();
    tree.set("1.last_name", "Murray Hopper");
    assert_eq!(tree.get("1.last_name"), Value::from("Murray Hopper"));
}

/// Setting a deep unwritten path creates the intermediate collections.
#[test]
fn test_set_autovivifies() {
    let mut tree = DotTree::new();
    tree.set("config.retries.max", 5);
    assert_eq!(
        tree.all(),
        Value::from(json!({"config": {"retries": {"max": 5}}}))
    );
}

/// A wildcard write over an empty collection materializes one element.
#[test]
fn test_wildcard_set_seeds_empty_root() {
    let mut tree = dot(json!([]));
    tree.set("*.name", "only");
    assert_eq!(tree.all(), Value::from(json!([{"name": "only"}])));
}

/// Deleting the same path twice reports true, then false.
#[test]
fn test_delete_idempotence() {
    let mut tree = people();
    assert!(tree.delete("0.last_name"));
    assert!(!tree.delete("0.last_name"));
    assert_eq!(tree.get("0.last_name"), Value::Null);
}

/// Emptiness of resolved values: present scalars are not empty, absent ones are.
#[test]
fn test_is_empty_at() {
    let tree = people();
    assert!(!tree.is_empty_at("0.first_name"));
    assert!(tree.is_empty_at("0.middle_name"));
    assert!(!tree.is_empty());
}

/// Root predicates over the fixture.
#[test]
fn test_root_predicates() {
    let tree = people();
    assert!(tree.is_numeric_keys());
    assert!(tree.is_multidimensional());
    assert!(!tree.is_nulled_values());

    assert!(dot(json!([null, null])).is_nulled_values());
    assert!(!dot(json!({"a": 1})).is_numeric_keys());
}

/// JSON rendering matches the current root exactly, key order included.
#[test]
fn test_to_json() {
    let json = people().to_json().unwrap();
    assert_eq!(
        json,
        r#"[{"first_name":"Ada","last_name":"Lovelace"},{"first_name":"Grace","last_name":"Hopper"}]"#
    );
}

/// JSON rendering of a resolved sub-path.
#[test]
fn test_to_json_at() {
    let tree = people();
    assert_eq!(
        tree.to_json_at("*.first_name").unwrap(),
        r#"["Ada","Grace"]"#
    );
    assert_eq!(tree.to_json_at("0.first_name").unwrap(), r#""Ada""#);
}

/// `clear` leaves an empty root.
#[test]
fn test_clear() {
    let mut tree = people();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.all(), Value::from(json!([])));
}

/// `len` counts the root's direct elements; `count` sizes a resolved path.
#[test]
fn test_len_and_count() {
    let tree = people();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.count("*.first_name"), 2);
    assert_eq!(tree.count("0"), 2);
    assert_eq!(tree.count("0.first_name"), 1);
    assert_eq!(tree.count("0.missing"), 0);
}

/// Iteration walks copies of the direct elements and restarts by recreation.
#[test]
fn test_iteration() {
    let tree = people();

    let elements: Vec<Value> = tree.iter().collect();
    assert_eq!(elements.len(), 2);
    assert_eq!(
        elements[0],
        Value::from(json!({"first_name": "Ada", "last_name": "Lovelace"}))
    );

    // a fresh iterator starts from the beginning again
    assert_eq!(tree.iter().count(), 2);

    let mut names = Vec::new();
    for element in &tree {
        names.push(element.child("first_name").cloned());
    }
    assert_eq!(
        names,
        vec![Some(Value::from("Ada")), Some(Value::from("Grace"))]
    );
}

/// Serializing the container yields the same value as `all`.
#[test]
fn test_serialize_matches_all() {
    let tree = people();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        serde_json::Value::from(tree.all())
    );
}

/// Fanning a wildcard over sibling records with a nested mapping merges them
/// into one coherent structure.
#[test]
fn test_multidimensional_merge() {
    let tree = dot(json!([{"a": {"x": 1}}, {"a": {"y": 2}}]));
    assert_eq!(tree.get("*.a"), Value::from(json!({"x": 1, "y": 2})));
}

/// Nested numeric collections flatten into a single sequence.
#[test]
fn test_wildcard_flattens_nested_sequences() {
    let tree = dot(json!([{"tags": ["x", "y"]}, {"tags": ["z"]}]));
    assert_eq!(tree.get("*.tags"), Value::from(json!(["x", "y", "z"])));
}

/// Path trimming: separators, whitespace, and a trailing wildcard are ignored.
#[test]
fn test_path_trimming() {
    let tree = people();
    assert_eq!(tree.get(" .0.first_name. "), Value::from("Ada"));
    assert_eq!(tree.get("0.*"), tree.get("0"));
    assert_eq!(tree.get("*"), tree.all());
}
