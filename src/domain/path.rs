//! Key path accumulated while walking a tree

/// Separator used for group and field ids
pub const PATH_SEPARATOR: char = '.';

/// Path of keys from the root of a tree (e.g. "image.pullPolicy").
///
/// A walker keeps a single `KeyPath` for the whole traversal: push a key
/// before descending into a child, pop it on the way back out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Create a root path (empty)
    pub fn root() -> Self {
        Self { segments: vec![] }
    }

    /// Check if this is the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a key segment
    pub fn push(&mut self, key: &str) {
        self.segments.push(key.to_string());
    }

    /// Remove the last key segment
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// Get the last segment
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Id of this path: segments joined by '.', empty at the root
    pub fn id(&self) -> String {
        self.segments.join(".")
    }

    /// Id of a direct child of this path, without touching the buffer
    pub fn child_id(&self, key: &str) -> String {
        if self.is_root() {
            key.to_string()
        } else {
            format!("{}{}{}", self.id(), PATH_SEPARATOR, key)
        }
    }
}
