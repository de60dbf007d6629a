//! The dot-path addressable container.
//!
//! `DotTree` wraps a single root value (a tree of mappings and sequences) and
//! exposes the path operations on it: read, write, existence, deletion,
//! counting, emptiness, and JSON rendering. The root is either owned by the
//! container or aliased to caller-owned storage through a shared cell, in
//! which case every mutation is visible on both sides.
//!
//! # Example
//!
//! ```
//! use dottree::{dot, Value};
//! use serde_json::json;
//!
//! let mut users = dot(json!([
//!     {"name": "Ada", "login": "ada"},
//!     {"name": "Grace", "login": "grace"},
//! ]));
//!
//! assert_eq!(users.get("*.name"), Value::from(json!(["Ada", "Grace"])));
//! assert!(users.has("1.login"));
//!
//! users.set("0.active", true);
//! assert_eq!(users.get("0.active"), Value::from(true));
//!
//! assert!(users.delete("1.login"));
//! assert!(!users.delete("1.login"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use serde::ser::{Serialize, Serializer};

use crate::dotpath::{evaluator, Parser};
use crate::value::{json, Value};

/// A live tree root shared between a `DotTree` and its caller.
pub type SharedValue = Rc<RefCell<Value>>;

/// Wraps a value in a shared cell suitable for `DotTree::set_reference`.
pub fn shared(value: impl Into<Value>) -> SharedValue {
    Rc::new(RefCell::new(value.into()))
}

/// Root storage: a private copy, or an alias into caller-owned storage that
/// must be mutated through.
#[derive(Debug, Clone)]
enum Root {
    Owned(Value),
    Shared(SharedValue),
}

/// A container addressing its nested contents by dot path.
#[derive(Debug, Clone)]
pub struct DotTree {
    root: Root,
}

impl DotTree {
    /// Creates an empty container (an empty sequence root).
    pub fn new() -> Self {
        Self {
            root: Root::Owned(Value::Array(Vec::new())),
        }
    }

    /// Replaces the root with an owned copy of `source`.
    ///
    /// Accepts anything convertible to a `Value`, including another
    /// container's resolved root. A scalar source is coerced into a
    /// one-element sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use dottree::{DotTree, Value};
    /// use serde_json::json;
    ///
    /// let mut tree = DotTree::new();
    /// tree.set_array("solo");
    /// assert_eq!(tree.all(), Value::from(json!(["solo"])));
    /// ```
    pub fn set_array(&mut self, source: impl Into<Value>) {
        self.root = Root::Owned(source.into().into_collection());
    }

    /// Replaces the root with an alias to caller-owned storage.
    ///
    /// The container and the caller share the same cell afterwards: external
    /// mutation of `items` is observable through the container, and `set`,
    /// `delete`, and `clear` write through to `items`.
    ///
    /// # Example
    ///
    /// ```
    /// use dottree::{shared, DotTree, Value};
    /// use serde_json::json;
    /// use std::rc::Rc;
    ///
    /// let items = shared(json!(["Ada", "Grace"]));
    /// let mut tree = DotTree::new();
    /// tree.set_reference(Rc::clone(&items));
    ///
    /// // external mutation is visible through the container
    /// *items.borrow_mut() = Value::from(json!(["Ada", "Grace", "Lin"]));
    /// assert_eq!(tree.len(), 3);
    ///
    /// // container mutation is visible on the caller's handle
    /// tree.set("0", "ada");
    /// assert_eq!(items.borrow().child("0"), Some(&Value::from("ada")));
    /// ```
    pub fn set_reference(&mut self, items: SharedValue) {
        self.root = Root::Shared(items);
    }

    /// Returns a copy of the resolved root.
    pub fn all(&self) -> Value {
        self.with_root(Value::clone)
    }

    /// Empties the root in place (through the alias, when shared).
    pub fn clear(&mut self) {
        self.with_root_mut(|root| *root = Value::Array(Vec::new()));
    }

    /// Checks whether `path` exists.
    pub fn has(&self, path: &str) -> bool {
        let parsed = Parser::parse(path);
        self.with_root(|root| evaluator::has(&parsed.segments, root))
    }

    /// Returns the value at `path`, or `Value::Null` when absent.
    pub fn get(&self, path: &str) -> Value {
        self.get_or(path, Value::Null)
    }

    /// Returns the value at `path`, or `default` when absent.
    ///
    /// # Example
    ///
    /// ```
    /// use dottree::{dot, Value};
    /// use serde_json::json;
    ///
    /// let tree = dot(json!({"a": 1}));
    /// assert_eq!(tree.get_or("b", 0), Value::from(0));
    /// ```
    pub fn get_or(&self, path: &str, default: impl Into<Value>) -> Value {
        let parsed = Parser::parse(path);
        let default = default.into();
        self.with_root(|root| evaluator::resolve(&parsed.segments, root, &default))
    }

    /// Writes `value` at `path`, creating missing intermediate collections.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        let parsed = Parser::parse(path);
        let value = value.into();
        self.with_root_mut(|root| evaluator::assign(&parsed.segments, root, value));
    }

    /// Deletes the value at `path`, reporting whether anything was removed.
    pub fn delete(&mut self, path: &str) -> bool {
        let parsed = Parser::parse(path);
        self.with_root_mut(|root| evaluator::remove(&parsed.segments, root))
    }

    /// The number of direct elements in the resolved root.
    pub fn len(&self) -> usize {
        self.get("").size()
    }

    /// The size of the value resolved at `path`: direct element count for
    /// collections, 1 for scalars, 0 when absent.
    pub fn count(&self, path: &str) -> usize {
        self.get(path).size()
    }

    /// Whether the resolved root is empty.
    pub fn is_empty(&self) -> bool {
        self.get("").is_empty()
    }

    /// Whether the value resolved at `path` is empty (absent values, empty
    /// collections and strings, zero, and false all count as empty).
    pub fn is_empty_at(&self, path: &str) -> bool {
        self.get(path).is_empty()
    }

    /// Whether the root's keys, in order, are exactly `0..len`.
    pub fn is_numeric_keys(&self) -> bool {
        self.with_root(Value::has_numeric_keys)
    }

    /// Whether any of the root's direct elements is itself a collection.
    pub fn is_multidimensional(&self) -> bool {
        self.with_root(Value::is_multidimensional)
    }

    /// Whether every direct element of the root is null.
    pub fn is_nulled_values(&self) -> bool {
        self.with_root(Value::is_all_null)
    }

    /// Renders the whole root as compact JSON text.
    pub fn to_json(&self) -> Result<String> {
        self.with_root(json::to_json)
    }

    /// Renders the value resolved at `path` as compact JSON text.
    pub fn to_json_at(&self, path: &str) -> Result<String> {
        json::to_json(&self.get(path))
    }

    /// Renders the whole root as pretty-printed JSON text.
    pub fn to_json_pretty(&self) -> Result<String> {
        self.with_root(json::to_json_pretty)
    }

    /// Iterates over copies of the root's direct elements, in order.
    ///
    /// The iterator is forward-only and single-pass; call `iter` again to
    /// start over.
    pub fn iter(&self) -> Iter {
        Iter {
            elements: self
                .with_root(|root| root.elements().into_iter().cloned().collect::<Vec<_>>())
                .into_iter(),
        }
    }

    fn with_root<R>(&self, f: impl FnOnce(&Value) -> R) -> R {
        match &self.root {
            Root::Owned(value) => f(value),
            Root::Shared(cell) => f(&cell.borrow()),
        }
    }

    fn with_root_mut<R>(&mut self, f: impl FnOnce(&mut Value) -> R) -> R {
        match &mut self.root {
            Root::Owned(value) => f(value),
            Root::Shared(cell) => f(&mut cell.borrow_mut()),
        }
    }
}

impl Default for DotTree {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for DotTree {
    fn from(source: Value) -> Self {
        Self {
            root: Root::Owned(source.into_collection()),
        }
    }
}

impl From<DotTree> for Value {
    fn from(tree: DotTree) -> Self {
        tree.all()
    }
}

impl From<&DotTree> for Value {
    fn from(tree: &DotTree) -> Self {
        tree.all()
    }
}

/// Structural equality on the resolved roots, aliasing aside.
impl PartialEq for DotTree {
    fn eq(&self, other: &Self) -> bool {
        self.with_root(|a| other.with_root(|b| a == b))
    }
}

/// Serializes the same value `all` returns.
impl Serialize for DotTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.with_root(|root| root.serialize(serializer))
    }
}

/// Iterator over copies of a container root's direct elements.
pub struct Iter {
    elements: std::vec::IntoIter<Value>,
}

impl Iterator for Iter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.elements.next()
    }
}

impl IntoIterator for DotTree {
    type Item = Value;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter {
            elements: self.all().into_elements().into_iter(),
        }
    }
}

impl IntoIterator for &DotTree {
    type Item = Value;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}
