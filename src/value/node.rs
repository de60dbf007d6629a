//! Tree node representation for dot-path addressable data.
//!
//! This module provides the core data structures for the trees that `dottree`
//! addresses. A tree is an arbitrary nesting of ordered mappings and sequences
//! with scalar leaves, represented by the `Value` enum. Mappings preserve
//! insertion order via `IndexMap`, which is what keeps wildcard fan-out and JSON
//! rendering deterministic.
//!
//! # Example
//!
//! ```
//! use dottree::value::{Value, Number};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), Value::String("dottree".to_string()));
//! map.insert("version".to_string(), Value::Number(Number::Integer(1)));
//! let object = Value::Object(map);
//!
//! assert!(object.is_object());
//! assert_eq!(object.child("name"), Some(&Value::String("dottree".to_string())));
//! ```

use indexmap::IndexMap;

/// A number stored in a tree (integer or float).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

/// A value in a dot-path addressable tree.
///
/// This enum represents the core tree shapes: mappings, sequences, strings,
/// numbers, booleans, and null. Mappings and sequences contain further `Value`
/// instances, so a tree of arbitrary depth is just a nested `Value`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null value, also used internally to mark absent results
    Null,
    /// A boolean
    Bool(bool),
    /// A number (integer or float)
    Number(Number),
    /// A string
    String(String),
    /// An ordered sequence of values
    Array(Vec<Value>),
    /// An ordered mapping from string keys to values
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value is a mapping.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true if this value is a sequence.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this value is a container (mapping or sequence).
    ///
    /// # Example
    ///
    /// ```
    /// use dottree::value::{Value, Number};
    ///
    /// assert!(Value::Array(vec![]).is_container());
    /// assert!(!Value::Number(Number::Integer(42)).is_container());
    /// ```
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    /// Looks up a direct child by literal key.
    ///
    /// Mappings resolve the key as-is; sequences resolve it as a parsed
    /// non-negative integer index. Scalars have no children.
    ///
    /// # Example
    ///
    /// ```
    /// use dottree::value::Value;
    ///
    /// let seq = Value::Array(vec![Value::String("a".to_string())]);
    /// assert_eq!(seq.child("0"), Some(&Value::String("a".to_string())));
    /// assert_eq!(seq.child("1"), None);
    /// assert_eq!(seq.child("x"), None);
    /// ```
    pub fn child(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries.get(key),
            Value::Array(elements) => key.parse::<usize>().ok().and_then(|i| elements.get(i)),
            _ => None,
        }
    }

    /// Looks up a direct child by literal key, mutably.
    pub fn child_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Object(entries) => entries.get_mut(key),
            Value::Array(elements) => key
                .parse::<usize>()
                .ok()
                .and_then(move |i| elements.get_mut(i)),
            _ => None,
        }
    }

    /// Returns references to the direct element values of a container,
    /// in iteration order. Scalars have no elements.
    pub fn elements(&self) -> Vec<&Value> {
        match self {
            Value::Object(entries) => entries.values().collect(),
            Value::Array(elements) => elements.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Returns mutable references to the direct element values of a container.
    pub fn elements_mut(&mut self) -> Vec<&mut Value> {
        match self {
            Value::Object(entries) => entries.values_mut().collect(),
            Value::Array(elements) => elements.iter_mut().collect(),
            _ => Vec::new(),
        }
    }

    /// Consumes the value and returns its direct elements.
    pub fn into_elements(self) -> Vec<Value> {
        match self {
            Value::Object(entries) => entries.into_values().collect(),
            Value::Array(elements) => elements,
            _ => Vec::new(),
        }
    }

    /// The size of this value: direct element count for containers,
    /// 0 for null, 1 for any other scalar.
    pub fn size(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Object(entries) => entries.len(),
            Value::Array(elements) => elements.len(),
            _ => 1,
        }
    }

    /// Coerces this value into a collection.
    ///
    /// Containers are returned unchanged, `Null` becomes an empty sequence,
    /// and any other scalar becomes a one-element sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use dottree::value::Value;
    ///
    /// let coerced = Value::String("solo".to_string()).into_collection();
    /// assert_eq!(coerced, Value::Array(vec![Value::String("solo".to_string())]));
    /// ```
    pub fn into_collection(self) -> Value {
        match self {
            container @ (Value::Object(_) | Value::Array(_)) => container,
            Value::Null => Value::Array(Vec::new()),
            scalar => Value::Array(vec![scalar]),
        }
    }

    /// Returns true if this container's key set, read in order, is exactly
    /// `0..len`. Sequences always qualify; mappings qualify when every key
    /// parses to its own position. Empty containers qualify vacuously.
    /// Scalars never qualify.
    pub fn has_numeric_keys(&self) -> bool {
        match self {
            Value::Array(_) => true,
            Value::Object(entries) => entries
                .keys()
                .enumerate()
                .all(|(position, key)| key.parse::<usize>() == Ok(position)),
            _ => false,
        }
    }

    /// Returns true if at least one direct element of this container is itself
    /// a container, i.e. counting terminals recursively would differ from
    /// counting direct elements.
    pub fn is_multidimensional(&self) -> bool {
        match self {
            Value::Object(_) | Value::Array(_) => {
                self.elements().iter().any(|element| element.is_container())
            }
            _ => false,
        }
    }

    /// Returns true if every direct element of this container is null
    /// (vacuously true for an empty container). Scalars are never all-null.
    pub fn is_all_null(&self) -> bool {
        match self {
            Value::Object(_) | Value::Array(_) => {
                self.elements().iter().all(|element| element.is_null())
            }
            _ => false,
        }
    }

    /// Emptiness in the loose sense used by `DotTree::is_empty`: null, false,
    /// numeric zero, the empty string, and empty containers are all empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(Number::Integer(i)) => *i == 0,
            Value::Number(Number::Float(f)) => *f == 0.0,
            Value::String(s) => s.is_empty(),
            Value::Array(elements) => elements.is_empty(),
            Value::Object(entries) => entries.is_empty(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::Integer(i as i64))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Array(elements)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Object(entries)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
