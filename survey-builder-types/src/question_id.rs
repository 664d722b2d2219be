use std::fmt;

use serde::{Deserialize, Serialize};

/// A stable identifier for a question, e.g. `"1"` or a generated UUID.
///
/// Used as the key in `Responses` and as the handle the editor operations
/// take. Ids are assigned when a question is created and never reused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create an id from an existing string (seed data, ids coming back from a UI).
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Generate a fresh, globally unique id.
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    /// An empty id. Questions carrying it get a fresh id when appended to a list.
    pub fn empty() -> Self {
        Self { id: String::new() }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Check if the id is empty (not yet assigned).
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&QuestionId> for QuestionId {
    fn from(id: &QuestionId) -> Self {
        id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let id = QuestionId::new("1");
        assert_eq!(id.as_str(), "1");
        assert!(!id.is_empty());
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = QuestionId::generate();
        let b = QuestionId::generate();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn default_is_empty() {
        assert!(QuestionId::default().is_empty());
    }

    #[test]
    fn display() {
        let id = QuestionId::new("q-42");
        assert_eq!(format!("{}", id), "q-42");
    }

    #[test]
    fn from_str() {
        let id: QuestionId = "3".into();
        assert_eq!(id.as_str(), "3");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&QuestionId::new("7")).unwrap();
        assert_eq!(json, "\"7\"");
    }
}
