/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// A tag is stable unless its name contains `unstable_marker`, ignoring case.
    /// An empty marker filters nothing.
    pub fn is_stable(&self, unstable_marker: &str) -> bool {
        if unstable_marker.is_empty() {
            return true;
        }
        !self
            .name
            .to_lowercase()
            .contains(&unstable_marker.to_lowercase())
    }
}

/// Picks the last stable tag in listing order.
///
/// The listing order is trusted as-is; no version ordering is applied.
pub fn last_stable_tag(tags: &[String], unstable_marker: &str) -> Option<String> {
    tags.iter()
        .map(Tag::new)
        .filter(|tag| tag.is_stable(unstable_marker))
        .last()
        .map(|tag| tag.name)
}
