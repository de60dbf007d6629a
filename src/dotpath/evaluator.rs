use super::ast::PathSegment;
use crate::value::Value;
use indexmap::IndexMap;

/// Checks whether a path exists under `root`.
///
/// Literal segments descend by key and fail on absent keys or non-container
/// nodes; a key holding null still counts as present. A wildcard requires the
/// current node to be a collection and holds only if the remaining path exists
/// under every direct element (vacuously true for an empty collection).
/// Reaching the end of the segments, including the zero-segment root address,
/// is success.
pub fn has(segments: &[PathSegment], root: &Value) -> bool {
    let mut current = root;

    for (index, segment) in segments.iter().enumerate() {
        if !current.is_container() {
            return false;
        }
        match segment {
            PathSegment::Wildcard => {
                let rest = &segments[index + 1..];
                return current
                    .elements()
                    .into_iter()
                    .all(|element| has(rest, element));
            }
            PathSegment::Key(key) => match current.child(key) {
                Some(child) => current = child,
                None => return false,
            },
        }
    }

    true
}

/// Resolves a path under `root`, returning `default` for absent results.
///
/// Literal misses do not abort the walk; the cursor just goes absent. A
/// wildcard over a non-collection yields `default` immediately; otherwise it
/// resolves the remaining path against every direct element, in iteration
/// order, and that sequence of results becomes the walk's value. After any
/// walk that consumed at least one segment the result is reconciled (see
/// `reconcile`), and a collection whose every element is null is treated as
/// absent.
pub fn resolve(segments: &[PathSegment], root: &Value, default: &Value) -> Value {
    let mut current: Option<&Value> = Some(root);
    let mut fanned: Option<Value> = None;

    for (index, segment) in segments.iter().enumerate() {
        match segment {
            PathSegment::Wildcard => {
                match current {
                    Some(node) if node.is_container() => {
                        let rest = &segments[index + 1..];
                        let results = node
                            .elements()
                            .into_iter()
                            .map(|element| resolve(rest, element, default))
                            .collect();
                        fanned = Some(Value::Array(results));
                    }
                    _ => return default.clone(),
                }
                break;
            }
            PathSegment::Key(key) => {
                current = current.and_then(|node| node.child(key));
            }
        }
    }

    let mut result = match fanned {
        Some(value) => value,
        None => current.cloned().unwrap_or(Value::Null),
    };

    if !segments.is_empty() {
        result = reconcile(result);
    }
    if result.is_all_null() {
        result = Value::Null;
    }

    if result.is_null() {
        default.clone()
    } else {
        result
    }
}

/// Assigns `value` at the path under `root`, creating missing intermediate
/// collections along the way.
///
/// Non-final literal segments vivify (or replace non-container values with)
/// an empty collection typed by the following segment. A non-final wildcard
/// seeds one placeholder element when the current collection is empty, then
/// fans the assignment out over every direct element. The final segment
/// assigns literally, overwriting whatever was there. A zero-segment path is
/// a no-op.
pub fn assign(segments: &[PathSegment], root: &mut Value, value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };

    if rest.is_empty() {
        // Parsing strips trailing wildcards, so a final `*` only appears in a
        // hand-built path; it assigns at the literal key "*".
        let key = match first {
            PathSegment::Key(key) => key.as_str(),
            PathSegment::Wildcard => "*",
        };
        set_child(root, key, value);
        return;
    }

    match first {
        PathSegment::Key(key) => {
            let slot = descend_or_create(root, key, &rest[0]);
            assign(rest, slot, value);
        }
        PathSegment::Wildcard => {
            if !root.is_container() {
                return;
            }
            if root.size() == 0 {
                seed_placeholder(root, &rest[0]);
            }
            for element in root.elements_mut() {
                assign(rest, element, value.clone());
            }
        }
    }
}

/// Removes the value at the path under `root`, reporting whether removal
/// happened.
///
/// A missing intermediate key aborts with `false`. A non-final wildcard
/// recurses over every direct element - all of them, even after a failure -
/// and reports the logical AND (vacuously true over an empty collection). The
/// final segment removes the key if it exists, null-valued or not. A
/// zero-segment path reports `false`; clearing the root is `DotTree::clear`.
pub fn remove(segments: &[PathSegment], root: &mut Value) -> bool {
    let Some((first, rest)) = segments.split_first() else {
        return false;
    };

    match first {
        PathSegment::Wildcard => {
            if rest.is_empty() {
                return remove_child(root, "*");
            }
            if !root.is_container() {
                return false;
            }
            let mut removed_everywhere = true;
            for element in root.elements_mut() {
                if !remove(rest, element) {
                    removed_everywhere = false;
                }
            }
            removed_everywhere
        }
        PathSegment::Key(key) => {
            if rest.is_empty() {
                return remove_child(root, key);
            }
            match root.child_mut(key) {
                Some(child) => remove(rest, child),
                None => false,
            }
        }
    }
}

/// Post-walk reconciliation for read results.
///
/// A collection that is multidimensional and sequentially indexed from zero
/// is one wildcard fan-out record per element; its elements are merged into a
/// single structure. When each element is itself a sequence of mapping
/// fragments, every element is collapsed to one mapping first.
fn reconcile(value: Value) -> Value {
    if !(value.is_multidimensional() && value.has_numeric_keys()) {
        return value;
    }

    let elements = value.into_elements();
    let premerge_elements = elements
        .first()
        .and_then(|first| first.child("0"))
        .is_some_and(Value::is_container);

    let elements = if premerge_elements {
        elements
            .into_iter()
            .map(|element| {
                if element.is_container() {
                    merge_all(element.into_elements())
                } else {
                    element
                }
            })
            .collect()
    } else {
        elements
    };

    merge_all(elements)
}

fn merge_all(elements: Vec<Value>) -> Value {
    let mut merged = Value::Null;
    for element in elements {
        merge_into(&mut merged, element);
    }
    merged
}

/// Merges `incoming` into `acc` with recursive-merge semantics: duplicate
/// mapping keys merge recursively, a later value widens a prior scalar into a
/// sequence, sequences concatenate, and sequence elements joining a mapping
/// take the next free numeric key.
fn merge_into(acc: &mut Value, incoming: Value) {
    match incoming {
        Value::Object(entries) => {
            if acc.is_null() {
                *acc = Value::Object(IndexMap::new());
            } else if !acc.is_object() {
                let old = std::mem::take(acc);
                *acc = Value::Object(numeric_keyed(old));
            }
            if let Value::Object(map) = acc {
                for (key, item) in entries {
                    match map.get_mut(&key) {
                        Some(existing) => merge_into(existing, item),
                        None => {
                            map.insert(key, item);
                        }
                    }
                }
            }
        }
        Value::Array(items) => match acc {
            Value::Array(elements) => elements.extend(items),
            Value::Null => *acc = Value::Array(items),
            Value::Object(map) => {
                let mut index = map.len();
                for item in items {
                    while map.contains_key(&index.to_string()) {
                        index += 1;
                    }
                    map.insert(index.to_string(), item);
                    index += 1;
                }
            }
            _ => {
                let old = std::mem::take(acc);
                let mut elements = vec![old];
                elements.extend(items);
                *acc = Value::Array(elements);
            }
        },
        scalar => match acc {
            Value::Array(elements) => elements.push(scalar),
            Value::Null => *acc = Value::Array(vec![scalar]),
            Value::Object(map) => {
                let mut index = map.len();
                while map.contains_key(&index.to_string()) {
                    index += 1;
                }
                map.insert(index.to_string(), scalar);
            }
            _ => {
                let old = std::mem::take(acc);
                *acc = Value::Array(vec![old, scalar]);
            }
        },
    }
}

/// Re-keys a value into a mapping with stringified positional keys, the shape
/// a sequence takes when string keys join it.
fn numeric_keyed(value: Value) -> IndexMap<String, Value> {
    match value {
        Value::Object(entries) => entries,
        other => other
            .into_collection()
            .into_elements()
            .into_iter()
            .enumerate()
            .map(|(index, element)| (index.to_string(), element))
            .collect(),
    }
}

/// Assigns `value` at a literal key directly under `node`, normalizing the
/// node first: scalars become an empty collection typed by the key, and a
/// string key lands a sequence into a numeric-keyed mapping.
fn set_child(node: &mut Value, key: &str, value: Value) {
    let numeric = key.parse::<usize>().is_ok();

    if node.is_array() && !numeric {
        let old = std::mem::take(node);
        *node = Value::Object(numeric_keyed(old));
    } else if !node.is_container() {
        *node = if numeric {
            Value::Array(Vec::new())
        } else {
            Value::Object(IndexMap::new())
        };
    }

    match node {
        Value::Object(entries) => {
            entries.insert(key.to_string(), value);
        }
        Value::Array(elements) => {
            if let Ok(index) = key.parse::<usize>() {
                if index < elements.len() {
                    elements[index] = value;
                } else {
                    elements.resize(index, Value::Null);
                    elements.push(value);
                }
            }
        }
        _ => {}
    }
}

/// Returns the slot at `key` under `node`, creating it (and normalizing
/// `node`) so the walk can keep descending. A slot that is not already a
/// container is replaced by an empty collection typed by the next segment.
fn descend_or_create<'a>(node: &'a mut Value, key: &str, next: &PathSegment) -> &'a mut Value {
    let slot = match key.parse::<usize>() {
        Ok(index) => {
            if !node.is_container() {
                *node = Value::Array(Vec::new());
            }
            match node {
                Value::Array(elements) => {
                    if index >= elements.len() {
                        elements.resize(index + 1, Value::Null);
                    }
                    &mut elements[index]
                }
                Value::Object(entries) => entries.entry(key.to_string()).or_insert(Value::Null),
                _ => unreachable!("node was normalized to a container"),
            }
        }
        Err(_) => {
            if node.is_array() {
                let old = std::mem::take(node);
                *node = Value::Object(numeric_keyed(old));
            } else if !node.is_object() {
                *node = Value::Object(IndexMap::new());
            }
            match node {
                Value::Object(entries) => entries.entry(key.to_string()).or_insert(Value::Null),
                _ => unreachable!("node was normalized to a mapping"),
            }
        }
    };

    if !slot.is_container() {
        *slot = empty_container_for(next);
    }
    slot
}

/// The empty intermediate collection vivified ahead of `next`: a sequence
/// before an index or wildcard, a mapping before anything else.
fn empty_container_for(next: &PathSegment) -> Value {
    match next {
        PathSegment::Key(key) if key.parse::<usize>().is_err() => Value::Object(IndexMap::new()),
        _ => Value::Array(Vec::new()),
    }
}

/// Seeds an empty collection with one placeholder element (a single-entry
/// mapping keyed by the next segment) so a wildcard write materializes
/// exactly one element instead of silently doing nothing.
fn seed_placeholder(collection: &mut Value, next: &PathSegment) {
    let key = match next {
        PathSegment::Key(key) => key.clone(),
        PathSegment::Wildcard => "*".to_string(),
    };
    let mut entry = IndexMap::new();
    entry.insert(key, Value::Null);
    let element = Value::Object(entry);

    match collection {
        Value::Array(elements) => elements.push(element),
        Value::Object(entries) => {
            entries.insert("0".to_string(), element);
        }
        _ => {}
    }
}

fn remove_child(node: &mut Value, key: &str) -> bool {
    match node {
        Value::Object(entries) => entries.shift_remove(key).is_some(),
        Value::Array(elements) => match key.parse::<usize>() {
            Ok(index) if index < elements.len() => {
                elements.remove(index);
                true
            }
            _ => false,
        },
        _ => false,
    }
}
