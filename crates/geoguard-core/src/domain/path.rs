//! Locations inside a JSON document.
//!
//! A [`JsonPath`] is a borrowed, stack-allocated chain of segments. The
//! validators extend it on the way down and only render it to a string when
//! a violation is reported, so the happy path never allocates.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Root,
    Key(&'a str),
    Index(usize),
}

/// A position in a JSON tree, rendered as `$.features[0].geometry`.
#[derive(Debug, Clone, Copy)]
pub struct JsonPath<'a> {
    parent: Option<&'a JsonPath<'a>>,
    segment: Segment<'a>,
}

impl JsonPath<'static> {
    /// The document root, `$`.
    pub const fn root() -> Self {
        Self {
            parent: None,
            segment: Segment::Root,
        }
    }
}

impl<'a> JsonPath<'a> {
    /// Descend into an object member.
    pub fn key<'b>(&'b self, key: &'b str) -> JsonPath<'b> {
        JsonPath {
            parent: Some(self),
            segment: Segment::Key(key),
        }
    }

    /// Descend into an array element.
    pub fn index<'b>(&'b self, index: usize) -> JsonPath<'b> {
        JsonPath {
            parent: Some(self),
            segment: Segment::Index(index),
        }
    }
}

impl Default for JsonPath<'static> {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for JsonPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent {
            fmt::Display::fmt(parent, f)?;
        }
        match self.segment {
            Segment::Root => f.write_str("$"),
            Segment::Key(key) => write!(f, ".{key}"),
            Segment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_as_dollar() {
        assert_eq!(JsonPath::root().to_string(), "$");
    }

    #[test]
    fn nested_segments_render_in_order() {
        let root = JsonPath::root();
        let features = root.key("features");
        let second = features.index(1);
        let geometry = second.key("geometry");
        let coords = geometry.key("coordinates");
        let ring = coords.index(0);
        let position = ring.index(3);

        assert_eq!(
            position.to_string(),
            "$.features[1].geometry.coordinates[0][3]"
        );
    }
}
