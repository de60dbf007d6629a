//! Parsed representation of dot-path expressions.

/// A segment in a dot path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A literal key: a mapping key, or a sequence index when it parses as a
    /// non-negative integer
    Key(String),
    /// The wildcard (`*`) - every direct element of the current collection
    Wildcard,
}

/// A complete parsed dot path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotPath {
    /// Segments that make up the path, left to right.
    pub segments: Vec<PathSegment>,
}

impl DotPath {
    /// Creates a new DotPath with the given segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Returns true if this path addresses the root itself.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}
