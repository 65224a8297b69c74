//! Defined/used bookkeeping for sanitized identifiers.

use std::collections::{HashMap, HashSet};

use tracing::warn;

/// Two distinct original names that sanitize to the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub id: String,
    pub first: String,
    pub second: String,
}

/// Tracks which identifiers have a node ("defined") and which appear as an
/// edge endpoint ("used"). Only grows.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    defined: HashSet<String>,
    used: Vec<String>,
    used_seen: HashSet<String>,
    origins: HashMap<String, String>,
    collisions: Vec<Collision>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `id` has a node. `original` is the unsanitized name.
    pub fn register_defined(&mut self, id: &str, original: &str) {
        self.note_origin(id, original);
        self.defined.insert(id.to_string());
    }

    /// Record that `id` was referenced as an edge endpoint.
    pub fn register_used(&mut self, id: &str, original: &str) {
        self.note_origin(id, original);
        if self.used_seen.insert(id.to_string()) {
            self.used.push(id.to_string());
        }
    }

    pub fn is_used(&self, id: &str) -> bool {
        self.used_seen.contains(id)
    }

    /// Ids that are used but never defined, once each, in first-seen order.
    pub fn undefined(&self) -> Vec<&str> {
        self.used
            .iter()
            .filter(|id| !self.defined.contains(*id))
            .map(String::as_str)
            .collect()
    }

    pub fn defined_count(&self) -> usize {
        self.defined.len()
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    fn note_origin(&mut self, id: &str, original: &str) {
        match self.origins.get(id) {
            None => {
                self.origins.insert(id.to_string(), original.to_string());
            }
            Some(first) if first != original => {
                if self
                    .collisions
                    .iter()
                    .any(|c| c.id == id && c.second == original)
                {
                    return;
                }
                warn!(id, first = %first, second = original, "identifier collision");
                self.collisions.push(Collision {
                    id: id.to_string(),
                    first: first.clone(),
                    second: original.to_string(),
                });
            }
            Some(_) => {}
        }
    }
}
