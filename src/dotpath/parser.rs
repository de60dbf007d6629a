//! Dot-path string parser.

use super::ast::{DotPath, PathSegment};

/// Parser for dot-path strings.
///
/// The grammar is deliberately small: keys joined by `.`, with `*` as a
/// whole-segment wildcard. Parsing is total - any input yields a path, and an
/// input that is empty after trimming addresses the root.
pub struct Parser;

impl Parser {
    /// Parses a raw dot-path string into a `DotPath`.
    ///
    /// Surrounding whitespace and leading/trailing separators are trimmed
    /// first, then any trailing run of wildcard-or-separator characters, so
    /// `".a.b."`, `"a.b"`, and `"a.b.*"` all address `a.b`. Segment content is
    /// not validated beyond the split; order is preserved.
    ///
    /// # Example
    ///
    /// ```
    /// use dottree::dotpath::{Parser, PathSegment};
    ///
    /// let path = Parser::parse("users.*.name");
    /// assert_eq!(
    ///     path.segments,
    ///     vec![
    ///         PathSegment::Key("users".to_string()),
    ///         PathSegment::Wildcard,
    ///         PathSegment::Key("name".to_string()),
    ///     ]
    /// );
    /// ```
    pub fn parse(raw: &str) -> DotPath {
        let trimmed = raw
            .trim_matches(|c: char| c == '.' || c.is_whitespace())
            .trim_end_matches(|c| c == '.' || c == '*');

        if trimmed.is_empty() {
            return DotPath::new(Vec::new());
        }

        let segments = trimmed
            .split('.')
            .map(|segment| {
                if segment == "*" {
                    PathSegment::Wildcard
                } else {
                    PathSegment::Key(segment.to_string())
                }
            })
            .collect();

        DotPath::new(segments)
    }
}
