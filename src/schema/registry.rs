//! Declaration registry

use indexmap::IndexMap;

/// Insertion-ordered mapping from declaration name to declaration text.
///
/// A name is inserted at most once: the first declaration registered under a
/// name wins and later shapes that derive the same name reuse it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: IndexMap<String, String>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Get the declaration text for a name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Register a declaration. Returns false if the name was already taken.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> bool {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, text.into());
        true
    }

    /// Number of registered declarations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over (name, text) in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Join every registered declaration, then the root declaration.
    pub fn assemble(&self, root: &str) -> String {
        let mut out = String::new();
        for text in self.entries.values() {
            out.push_str(text);
            out.push('\n');
        }
        out.push_str(root);
        out
    }
}
