//! The tree value model and its JSON text conversion.
//!
//! `Value` is the node type every dot-path operation walks over; `json`
//! converts whole trees to and from JSON text.

pub mod json;
pub mod node;

pub use json::{from_json, to_json, to_json_pretty};
pub use node::{Number, Value};
