//! dottree - access nested map/array data quickly using dot-notation paths.
//!
//! A `DotTree` holds a tree of ordered mappings and sequences and addresses
//! values inside it with paths like `"users.0.name"`. The `*` wildcard fans an
//! operation out over every direct element of a collection, and wildcard reads
//! reconcile their per-element results back into a single value.
//!
//! # Example
//!
//! ```
//! use dottree::{dot, Value};
//! use serde_json::json;
//!
//! let mut people = dot(json!([
//!     {"first_name": "Ada", "last_name": "Lovelace"},
//!     {"first_name": "Grace", "last_name": "Hopper"},
//! ]));
//!
//! assert_eq!(
//!     people.get("*.first_name"),
//!     Value::from(json!(["Ada", "Grace"]))
//! );
//!
//! people.set("1.last_name", "Murray Hopper");
//! assert_eq!(people.get("1.last_name"), Value::from("Murray Hopper"));
//!
//! assert!(people.delete("0.last_name"));
//! assert_eq!(people.get("0.last_name"), Value::Null);
//! ```

pub mod dotpath;
pub mod tree;
pub mod value;

pub use dotpath::{DotPath, Parser, PathSegment};
pub use tree::{shared, DotTree, Iter, SharedValue};
pub use value::{Number, Value};

/// Creates a `DotTree` from anything convertible to a tree value.
///
/// Scalars are coerced into a one-element sequence, like `DotTree::set_array`.
pub fn dot(source: impl Into<Value>) -> DotTree {
    DotTree::from(source.into())
}
