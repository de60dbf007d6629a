//! Dot-path parsing and evaluation for nested tree access.
//!
//! This module is the path-resolution engine: it turns raw strings like
//! `"users.0.name"` into segment sequences and walks them over a tree of
//! mappings and sequences.
//!
//! # Supported Syntax
//!
//! - `key` - mapping key, or sequence index when it parses as an integer
//! - `a.b.c` - nested access, one segment per level
//! - `*` - wildcard: every direct element of the current collection
//!
//! Leading/trailing separators and a trailing wildcard are ignored, so
//! `".a.b."` and `"a.b.*"` both address `a.b`, and `"*"` addresses the root.

pub mod ast;
pub mod evaluator;
pub mod parser;

pub use ast::{DotPath, PathSegment};
pub use parser::Parser;
