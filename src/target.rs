//! Selectable targets and their stable identifiers.

use std::fmt;

use crate::geometry::Rect;

/// Opaque, stable identifier for a selectable entity. The host decides
/// what the string means (a data attribute, a database key, an index);
/// the engine only compares and collects them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for TargetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A selection candidate: a stable id plus its current viewport-space
/// bounding box. Hosts rebuild these per query so bounds stay current
/// while the container scrolls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: TargetId,
    pub bounds: Rect,
}

impl Target {
    pub fn new(id: impl Into<TargetId>, bounds: Rect) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_compare_by_content() {
        let a = TargetId::from("item-1");
        let b = TargetId::new(String::from("item-1"));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "item-1");
    }
}
